//! Observable objects: anything that can hand its top-level fields to a comparator

use indexmap::IndexMap;

use crate::schema::{FieldName, Schema};
use crate::value::Value;

/// An object whose top-level fields can be observed.
///
/// Implementors declare their fields explicitly through [`Observable::schema`];
/// nothing is discovered at runtime. `field` must return composites as
/// aliases of the stored handle (a clone of the `SharedRef`), never as a
/// fresh container, or the field will look reassigned on every pass.
pub trait Observable {
    /// The fields this object exposes, in declaration order.
    fn schema(&self) -> Schema;

    /// Current value of `name`, or `None` if the object has no such field.
    fn field(&self, name: &str) -> Option<Value>;
}

impl<T: Observable + ?Sized> Observable for &T {
    fn schema(&self) -> Schema {
        (**self).schema()
    }

    fn field(&self, name: &str) -> Option<Value> {
        (**self).field(name)
    }
}

/// A dynamic observed object: an ordered map from field name to value.
///
/// # Example
///
/// ```
/// use snapwatch::{ListRef, ObservedObject, Value};
///
/// let players = ListRef::default();
/// let mut obj = ObservedObject::new()
///     .with_field("name", "Match 0")
///     .with_field("playerNames", players.clone());
///
/// players.push("Bob0"); // visible through obj, same container
/// assert_eq!(obj.get("playerNames").and_then(|v| v.as_list()).map(|l| l.len()), Some(1));
///
/// obj.set("name", "Match 1");
/// assert_eq!(obj.get("name"), Some(&Value::string("Match 1")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObservedObject {
    fields: IndexMap<FieldName, Value>,
}

impl ObservedObject {
    /// Create an object with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field (builder pattern).
    pub fn with_field(mut self, name: impl Into<FieldName>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Assign a field, returning the previous value.
    ///
    /// Assigning a name that was not there before changes the schema.
    pub fn set(&mut self, name: impl Into<FieldName>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Borrow a field's value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Remove a field, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.fields.shift_remove(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the object has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Observable for ObservedObject {
    fn schema(&self) -> Schema {
        self.fields.keys().cloned().collect()
    }

    fn field(&self, name: &str) -> Option<Value> {
        self.fields.get(name).cloned()
    }
}

/// Implement [`Observable`] for a struct by listing its tracked fields.
///
/// Each listed field must be `Clone + Into<Value>`. Keep composite fields as
/// handles (`ListRef`, `MapRef`, `RecordRef`) so that reading them aliases
/// rather than copies.
///
/// # Example
///
/// ```
/// use snapwatch::{observable, ListRef, Observable};
///
/// struct Match {
///     name: String,
///     player_names: ListRef,
/// }
///
/// observable!(Match { name, player_names });
///
/// let m = Match { name: "Match 0".into(), player_names: ListRef::default() };
/// assert_eq!(m.schema().iter().collect::<Vec<_>>(), ["name", "player_names"]);
/// ```
#[macro_export]
macro_rules! observable {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::Observable for $ty {
            fn schema(&self) -> $crate::Schema {
                $crate::Schema::new([$(stringify!($field)),+])
            }

            fn field(&self, name: &str) -> ::std::option::Option<$crate::Value> {
                match name {
                    $(stringify!($field) => ::std::option::Option::Some(
                        $crate::Value::from(::std::clone::Clone::clone(&self.$field)),
                    ),)+
                    _ => ::std::option::Option::None,
                }
            }
        }
    };
}
