//! Display and Debug implementations for Value

use std::fmt;

use super::*;

fn write_seq<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'a Value>,
    seen: &mut Vec<usize>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write_value(f, item, seen)?;
    }
    Ok(())
}

fn write_fields<'a>(
    f: &mut fmt::Formatter<'_>,
    fields: impl Iterator<Item = (&'a String, &'a Value)>,
    seen: &mut Vec<usize>,
) -> fmt::Result {
    for (i, (k, v)) in fields.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}: ", k)?;
        write_value(f, v, seen)?;
    }
    Ok(())
}

// `seen` holds the containers currently being printed; meeting one again
// prints an ellipsis instead of descending.
fn write_value(f: &mut fmt::Formatter<'_>, value: &Value, seen: &mut Vec<usize>) -> fmt::Result {
    match value {
        Value::Unit => write!(f, "()"),
        Value::Bool(b) => write!(f, "{}", b),
        Value::Char(c) => write!(f, "'{}'", c),
        Value::I64(n) => write!(f, "{}", n),
        Value::U64(n) => write!(f, "{}u64", n),
        Value::F64(n) => write!(f, "{:?}", n),
        Value::String(s) => write!(f, "{:?}", s.as_str()),

        Value::List(l) => {
            if seen.contains(&l.addr()) {
                return write!(f, "[...]");
            }
            seen.push(l.addr());
            write!(f, "[")?;
            write_seq(f, l.read().iter(), seen)?;
            seen.pop();
            write!(f, "]")
        }

        Value::Map(m) => {
            if seen.contains(&m.addr()) {
                return write!(f, "{{...}}");
            }
            seen.push(m.addr());
            write!(f, "{{")?;
            write_fields(f, m.read().iter(), seen)?;
            seen.pop();
            write!(f, "}}")
        }

        Value::Record(r) => {
            let record = r.read();
            if seen.contains(&r.addr()) {
                return write!(f, "{} {{ ... }}", record.type_name);
            }
            seen.push(r.addr());
            write!(f, "{} {{ ", record.type_name)?;
            write_fields(f, record.fields.iter(), seen)?;
            seen.pop();
            write!(f, " }}")
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, &mut Vec::new())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s.as_str()), // No quotes for Display
            Value::Char(c) => write!(f, "{}", c),
            _ => fmt::Debug::fmt(self, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_list() {
        let v = Value::list(["Bob0", "Chuck1"]);
        assert_eq!(format!("{:?}", v), r#"["Bob0", "Chuck1"]"#);
    }

    #[test]
    fn test_debug_record() {
        let v = Value::record(RecordValue::new("Match").with_field("round", 2i64));
        assert_eq!(format!("{:?}", v), "Match { round: 2 }");
    }

    #[test]
    fn test_debug_self_containing_list() {
        let l = ListRef::from_items([1i64]);
        l.push(l.clone());
        assert_eq!(format!("{:?}", Value::List(l)), "[1, [...]]");
    }

    #[test]
    fn test_debug_cycle_through_map_and_record() {
        let m = MapRef::default();
        let r = RecordRef::new(RecordValue::new("Node").with_field("map", m.clone()));
        m.insert("node", r.clone());
        assert_eq!(
            format!("{:?}", Value::Record(r)),
            "Node { map: {node: Node { ... }} }"
        );
    }

    #[test]
    fn test_debug_shared_but_acyclic_is_printed_twice() {
        let inner = ListRef::from_items([1i64]);
        let outer = Value::list([inner.clone(), inner]);
        assert_eq!(format!("{:?}", outer), "[[1], [1]]");
    }

    #[test]
    fn test_display_string_unquoted() {
        assert_eq!(Value::string("Match 0").to_string(), "Match 0");
        assert_eq!(Value::F64(1.0).to_string(), "1.0");
    }
}
