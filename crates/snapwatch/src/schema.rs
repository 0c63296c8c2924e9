//! Field schemas: the statically declared set of tracked field names

use indexmap::IndexSet;

/// Name of a top-level field of an observed object.
pub type FieldName = String;

/// Ordered set of field names an observed object exposes.
///
/// The order is the declaration order, and it is the order in which dirty
/// fields are reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: IndexSet<FieldName>,
}

impl Schema {
    /// Build a schema from field names. Duplicates collapse to the first.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FieldName>,
    {
        Self {
            fields: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether `name` is part of the schema.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains(name)
    }

    /// Position of `name` in declaration order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.get_index_of(name)
    }

    /// Field names in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    /// Compare against `current`: fields of `self` absent from `current`,
    /// then fields of `current` absent from `self`.
    ///
    /// Both lists are empty when the field sets are equal; order does not
    /// matter.
    pub fn diff(&self, current: &Schema) -> (Vec<FieldName>, Vec<FieldName>) {
        let missing = self
            .fields
            .iter()
            .filter(|f| !current.fields.contains(*f))
            .cloned()
            .collect();
        let unexpected = current
            .fields
            .iter()
            .filter(|f| !self.fields.contains(*f))
            .cloned()
            .collect();
        (missing, unexpected)
    }
}

impl<S: Into<FieldName>> FromIterator<S> for Schema {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
