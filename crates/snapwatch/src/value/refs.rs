//! Shared, identity-bearing handles for composite values

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{RecordValue, Value};

/// A shared handle to a mutable container.
///
/// Cloning the handle aliases the same container: a mutation made through
/// any clone is visible through all of them and never changes the handle's
/// identity. Only [`SharedRef::new`] mints a new identity.
pub struct SharedRef<T> {
    inner: Arc<RwLock<T>>,
}

/// Handle to a list (a sequence of values).
pub type ListRef = SharedRef<Vec<Value>>;

/// Handle to a string-keyed map, kept in insertion order.
pub type MapRef = SharedRef<IndexMap<String, Value>>;

/// Handle to a named record.
pub type RecordRef = SharedRef<RecordValue>;

impl<T> SharedRef<T> {
    /// Wrap `value` in a new container with its own identity.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Whether both handles point at the same container.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Address of the container, stable for its lifetime.
    pub fn addr(&self) -> usize {
        Arc::as_ptr(&self.inner) as *const () as usize
    }

    /// Number of live handles aliasing this container.
    pub fn alias_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Borrow the contents for reading.
    ///
    /// Re-entrant on one thread, so nested containers can be walked while an
    /// outer one is still borrowed.
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.inner.read_recursive()
    }

    /// Borrow the contents for in-place mutation.
    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.inner.write()
    }
}

impl<T: Clone> SharedRef<T> {
    /// Copy the contents into a brand new container (new identity).
    pub fn deep_clone(&self) -> Self {
        Self::new(self.read().clone())
    }
}

impl<T> Clone for SharedRef<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for SharedRef<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{:#x} {:?}", self.addr(), &*self.read())
    }
}

// ═══════════════════════════════════════════════════════════════════
// List helpers
// ═══════════════════════════════════════════════════════════════════

impl SharedRef<Vec<Value>> {
    /// Build a list handle from anything convertible to values.
    pub fn from_items<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::new(items.into_iter().map(Into::into).collect())
    }

    /// Append in place. Identity is unchanged.
    pub fn push(&self, item: impl Into<Value>) {
        self.write().push(item.into());
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Clone of the element at `index`.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.read().get(index).cloned()
    }

    /// Copy of the current elements.
    pub fn to_vec(&self) -> Vec<Value> {
        self.read().clone()
    }
}

// ═══════════════════════════════════════════════════════════════════
// Map helpers
// ═══════════════════════════════════════════════════════════════════

impl SharedRef<IndexMap<String, Value>> {
    /// Build a map handle from key/value pairs.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::new(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Insert or overwrite an entry in place. Identity is unchanged.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.write().insert(key.into(), value.into())
    }

    /// Clone of the value under `key`.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.read().get(key).cloned()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_aliases_same_container() {
        let a = ListRef::default();
        let b = a.clone();
        a.push("x");
        assert!(a.ptr_eq(&b));
        assert_eq!(b.len(), 1);
        assert_eq!(a.alias_count(), 2);
    }

    #[test]
    fn test_new_has_distinct_identity() {
        let a = ListRef::from_items(["x"]);
        let b = a.deep_clone();
        assert!(!a.ptr_eq(&b));
        assert_eq!(a.to_vec(), b.to_vec());
    }

    #[test]
    fn test_list_get_and_is_empty() {
        let l = ListRef::default();
        assert!(l.is_empty());
        assert_eq!(l.get(0), None);
        l.push(7i64);
        assert!(!l.is_empty());
        assert_eq!(l.get(0), Some(Value::I64(7)));
        assert_eq!(l.get(1), None);
    }

    #[test]
    fn test_addr_stable_across_mutation() {
        let m = MapRef::default();
        let before = m.addr();
        m.insert("k", 1i64);
        assert_eq!(m.addr(), before);
        assert_eq!(m.get("k"), Some(Value::I64(1)));
    }
}
