//! Detection results: dirty field sets and per-field changes

use std::fmt;

use indexmap::IndexSet;
use serde::Serialize;

use crate::schema::FieldName;
use crate::value::Value;

/// Field names found dirty by one detection pass, in schema order.
///
/// An empty set means no observable change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DirtySet {
    fields: IndexSet<FieldName>,
}

impl DirtySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a field dirty.
    pub fn insert(&mut self, field: impl Into<FieldName>) -> bool {
        self.fields.insert(field.into())
    }

    /// Whether `field` is dirty.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    /// Number of dirty fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether nothing is dirty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Dirty field names in schema order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    /// The dirty fields that also appear in `watched`, keeping this set's order.
    pub fn restrict_to<'a, I>(&self, watched: I) -> DirtySet
    where
        I: IntoIterator<Item = &'a str> + Clone,
    {
        self.fields
            .iter()
            .filter(|f| watched.clone().into_iter().any(|w| w == f.as_str()))
            .cloned()
            .collect()
    }

    /// Consume into a vector of names.
    pub fn into_vec(self) -> Vec<FieldName> {
        self.fields.into_iter().collect()
    }
}

impl<S: Into<FieldName>> FromIterator<S> for DirtySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for DirtySet {
    type Item = FieldName;
    type IntoIter = indexmap::set::IntoIter<FieldName>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl fmt::Display for DirtySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", field)?;
        }
        write!(f, "}}")
    }
}

/// One dirty field with the values either side of the pass.
#[derive(Debug, Clone)]
pub struct FieldChange {
    /// The field name
    pub field: FieldName,

    /// Value recorded by the previous snapshot
    pub previous: Value,

    /// Value read during this pass
    pub current: Value,
}

impl FieldChange {
    /// Whether the field was reassigned to a value of a different type.
    pub fn type_changed(&self) -> bool {
        self.previous.type_name() != self.current.type_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let set: DirtySet = ["name", "playerNames"].into_iter().collect();
        assert_eq!(set.to_string(), "{name, playerNames}");
        assert_eq!(DirtySet::new().to_string(), "{}");
    }

    #[test]
    fn test_insert_and_contains() {
        let mut set = DirtySet::new();
        assert!(set.insert("name"));
        assert!(!set.insert("name"));
        assert!(set.contains("name"));
        assert!(!set.contains("round"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_restrict_to() {
        let set: DirtySet = ["a", "b", "c"].into_iter().collect();
        let only = set.restrict_to(["c", "a", "z"]);
        assert_eq!(only.into_vec(), vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_serializes_as_list() {
        let set: DirtySet = ["name"].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["name"]"#);
    }

    #[test]
    fn test_type_changed() {
        let change = FieldChange {
            field: "x".into(),
            previous: Value::list([1i64]),
            current: Value::map([("k", 1i64)]),
        };
        assert!(change.type_changed());
    }
}
