//! Record values: named, ordered field sets nested inside an observed object

use indexmap::IndexMap;

use super::Value;

/// A record instance with named fields.
///
/// Uses IndexMap to preserve field order for predictable iteration and
/// display.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
    /// The record's type name (e.g., "Match", "Player")
    pub type_name: String,

    /// The record's fields in definition order
    pub fields: IndexMap<String, Value>,
}

impl RecordValue {
    /// Create a new empty record
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Add a field (builder pattern)
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Get a field by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Overwrite a field, returning the old value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }
}
