//! Note store trait definition.
//!
//! `NoteStore` mirrors the shape of the browser's `Storage` interface: an entry
//! count, key lookup by index and value lookup by key. Exporters only ever read
//! through it; stores are never mutated by an export.

use crate::error::Result;

/// Read-only view over a key-value note store.
///
/// Implementations must ensure:
/// - `key(i)` for `i < len()` addresses each entry once during a scan
/// - Values are returned exactly as stored
///
/// Enumeration order is whatever the backing store provides and is not
/// guaranteed to be stable across hosts.
pub trait NoteStore {
    /// Number of entries currently in the store.
    fn len(&self) -> Result<usize>;

    /// Key at `index`, or `None` if the index is out of range.
    fn key(&self, index: usize) -> Result<Option<String>>;

    /// Value stored under `key`, or `None` if absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Whether the store holds no entries.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl<S: NoteStore + ?Sized> NoteStore for &S {
    fn len(&self) -> Result<usize> {
        (**self).len()
    }

    fn key(&self, index: usize) -> Result<Option<String>> {
        (**self).key(index)
    }

    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_dyn_store(_store: &dyn NoteStore) {}
    }
}
