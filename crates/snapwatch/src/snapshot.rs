//! Snapshots: the recorded field values a detection pass compares against

use indexmap::IndexMap;

use crate::error::{DetectError, Result};
use crate::object::Observable;
use crate::schema::{FieldName, Schema};
use crate::value::Value;

/// An immutable record of an object's top-level fields at one point in time.
///
/// Primitives are copied; composites are stored as aliased handles, so a
/// snapshot remembers *which* container a field held, not what was in it.
#[derive(Debug, Clone)]
pub struct Snapshot {
    schema: Schema,
    values: IndexMap<FieldName, Value>,
}

impl Snapshot {
    /// Record every field `obj` declares.
    ///
    /// Fails with a schema mismatch if the schema names a field the object
    /// cannot produce.
    pub fn capture<O: Observable + ?Sized>(obj: &O) -> Result<Self> {
        let schema = obj.schema();
        let mut values = IndexMap::with_capacity(schema.len());
        let mut missing = Vec::new();

        for name in schema.iter() {
            match obj.field(name) {
                Some(value) => {
                    values.insert(name.to_string(), value);
                }
                None => missing.push(name.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(DetectError::missing(missing));
        }
        Ok(Self { schema, values })
    }

    /// The field set this snapshot tracks.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The recorded value of `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Recorded fields in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of recorded fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no fields are recorded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
