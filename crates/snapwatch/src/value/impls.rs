//! Value trait implementations: constructors, predicates, extractors, From traits, PartialEq

use std::sync::Arc;

use indexmap::IndexMap;

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Arc::new(s.into()))
    }

    /// Create a list value in a new container
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::List(ListRef::from_items(items))
    }

    /// Create a map value in a new container
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Map(MapRef::from_entries(entries))
    }

    /// Create a record value in a new container
    pub fn record(r: RecordValue) -> Self {
        Value::Record(RecordRef::new(r))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Check if value is compared by value
    pub fn is_primitive(&self) -> bool {
        !self.is_composite()
    }

    /// Check if value is compared by identity
    pub fn is_composite(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_) | Value::Record(_))
    }

    /// Check if value is unit type
    pub fn is_unit(&self) -> bool {
        matches!(self, Value::Unit)
    }

    /// Check if value is numeric
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::I64(_) | Value::U64(_) | Value::F64(_))
    }

    /// Short name of the variant's type, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Unit => "()",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::I64(_) => "i64",
            Value::U64(_) => "u64",
            Value::F64(_) => "f64",
            Value::String(_) => "String",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
            Value::Record(_) => "Record",
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe access)
    // ═══════════════════════════════════════════════════════════════════

    /// Extract boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract as i64 (converts from u64 when it fits)
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I64(n) => Some(*n),
            Value::U64(n) => (*n).try_into().ok(),
            _ => None,
        }
    }

    /// Extract float value
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F64(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Extract the list handle
    pub fn as_list(&self) -> Option<&ListRef> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Extract the map handle
    pub fn as_map(&self) -> Option<&MapRef> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Extract the record handle
    pub fn as_record(&self) -> Option<&RecordRef> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// PartialEq Implementation
// ═══════════════════════════════════════════════════════════════════

/// Deep content equality. The detector never uses this; see
/// [`Value::identical`].
///
/// Containers that hold themselves are handled: a pair of containers that is
/// already being compared further up the stack counts as equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        deep_eq(self, other, &mut Vec::new())
    }
}

fn deep_eq(a: &Value, b: &Value, seen: &mut Vec<(usize, usize)>) -> bool {
    match (a, b) {
        (Value::Unit, Value::Unit) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Char(a), Value::Char(b)) => a == b,
        (Value::I64(a), Value::I64(b)) => a == b,
        (Value::U64(a), Value::U64(b)) => a == b,
        (Value::F64(a), Value::F64(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,

        (Value::List(a), Value::List(b)) => guarded(a, b, seen, |seen| {
            let (xs, ys) = (a.read(), b.read());
            xs.len() == ys.len() && xs.iter().zip(ys.iter()).all(|(x, y)| deep_eq(x, y, seen))
        }),
        (Value::Map(a), Value::Map(b)) => guarded(a, b, seen, |seen| {
            let (xs, ys) = (a.read(), b.read());
            fields_eq(&xs, &ys, seen)
        }),
        (Value::Record(a), Value::Record(b)) => guarded(a, b, seen, |seen| {
            let (x, y) = (a.read(), b.read());
            x.type_name == y.type_name && fields_eq(&x.fields, &y.fields, seen)
        }),

        // Different types are never equal
        _ => false,
    }
}

/// Runs `compare` with the pair pushed on the stack, short-circuiting the
/// same container and pairs already in progress.
fn guarded<T>(
    a: &SharedRef<T>,
    b: &SharedRef<T>,
    seen: &mut Vec<(usize, usize)>,
    compare: impl FnOnce(&mut Vec<(usize, usize)>) -> bool,
) -> bool {
    let pair = (a.addr(), b.addr());
    if a.ptr_eq(b) || seen.contains(&pair) {
        return true;
    }
    seen.push(pair);
    let equal = compare(seen);
    seen.pop();
    equal
}

// Order-insensitive, like IndexMap's own PartialEq
fn fields_eq(
    xs: &IndexMap<String, Value>,
    ys: &IndexMap<String, Value>,
    seen: &mut Vec<(usize, usize)>,
) -> bool {
    xs.len() == ys.len()
        && xs
            .iter()
            .all(|(k, x)| ys.get(k).is_some_and(|y| deep_eq(x, y, seen)))
}

// ═══════════════════════════════════════════════════════════════════
// From Trait Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Unit
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::I64(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::I64(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::U64(n as u64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::U64(n)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::U64(n as u64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::F64(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

// Handles convert by aliasing, never by copying: the field keeps its identity.
impl From<ListRef> for Value {
    fn from(l: ListRef) -> Self {
        Value::List(l)
    }
}

impl From<MapRef> for Value {
    fn from(m: MapRef) -> Self {
        Value::Map(m)
    }
}

impl From<RecordRef> for Value {
    fn from(r: RecordRef) -> Self {
        Value::Record(r)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Unit, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Constructors
    #[test]
    fn test_list_constructor() {
        let v = Value::list([1i64, 2]);
        assert!(matches!(v, Value::List(_)));
        assert_eq!(v.as_list().map(|l| l.len()), Some(2));
    }

    #[test]
    fn test_map_constructor() {
        let v = Value::map([("a", 1i64)]);
        assert_eq!(v.as_map().and_then(|m| m.get("a")), Some(Value::I64(1)));
    }

    #[test]
    fn test_record_constructor() {
        let v = Value::record(RecordValue::new("Player").with_field("name", "Bob0"));
        let r = v.as_record().unwrap();
        assert_eq!(r.read().type_name, "Player");
        assert_eq!(r.read().get("name"), Some(&Value::string("Bob0")));
    }

    // Predicates
    #[test]
    fn test_primitive_vs_composite() {
        assert!(Value::I64(1).is_primitive());
        assert!(Value::string("s").is_primitive());
        assert!(Value::list(Vec::<i64>::new()).is_composite());
        assert!(Value::map(Vec::<(String, i64)>::new()).is_composite());
    }

    #[test]
    fn test_is_unit_and_numeric() {
        assert!(Value::from(None::<bool>).is_unit());
        assert!(!Value::Bool(false).is_unit());
        assert!(Value::U64(7).is_numeric());
        assert!(Value::F64(0.5).is_numeric());
        assert!(!Value::string("7").is_numeric());
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::Unit.type_name(), "()");
        assert_eq!(Value::F64(0.5).type_name(), "f64");
        assert_eq!(Value::list([true]).type_name(), "List");
    }

    // Extractors
    #[test]
    fn test_as_i64() {
        assert_eq!(Value::I64(-3).as_i64(), Some(-3));
        assert_eq!(Value::U64(3).as_i64(), Some(3));
        assert_eq!(Value::U64(u64::MAX).as_i64(), None);
        assert_eq!(Value::string("3").as_i64(), None);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Value::string("hello").as_str(), Some("hello"));
        assert_eq!(Value::Bool(true).as_str(), None);
    }

    // PartialEq is deep
    #[test]
    fn test_partialeq_compares_contents() {
        let a = Value::list(["Bob0"]);
        let b = Value::list(["Bob0"]);
        assert_eq!(a, b);
        assert!(!a.identical(&b));
    }

    #[test]
    fn test_partialeq_self_containing_lists() {
        let a = ListRef::from_items([1i64]);
        a.push(a.clone());
        let b = ListRef::from_items([1i64]);
        b.push(b.clone());
        assert_eq!(Value::List(a.clone()), Value::List(b));

        let c = ListRef::from_items([2i64]);
        c.push(c.clone());
        assert_ne!(Value::List(a), Value::List(c));
    }

    #[test]
    fn test_partialeq_mutually_containing_maps() {
        let a = MapRef::default();
        let b = MapRef::default();
        a.insert("peer", b.clone());
        b.insert("peer", a.clone());
        let c = MapRef::default();
        c.insert("peer", c.clone());
        assert_eq!(Value::Map(a), Value::Map(c));
    }

    // From
    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Unit);
        assert_eq!(Value::from(Some(2i64)), Value::I64(2));
    }

    #[test]
    fn test_from_handle_aliases() {
        let l = ListRef::default();
        let v = Value::from(l.clone());
        assert!(v.as_list().unwrap().ptr_eq(&l));
    }
}
