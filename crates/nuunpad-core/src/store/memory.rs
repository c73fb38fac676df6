use crate::error::Result;

use super::traits::NoteStore;

/// In-memory note store that keeps entries in insertion order.
///
/// Used by tests and as the loaded form of a snapshot file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryNoteStore {
    entries: Vec<(String, String)>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Insert or replace a value. A replaced key keeps its original position.
    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Remove a key, returning its previous value.
    pub fn remove_item(&mut self, key: &str) -> Option<String> {
        let position = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(position).1)
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryNoteStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = MemoryNoteStore::new();
        for (key, value) in iter {
            store.set_item(key, value);
        }
        store
    }
}

impl NoteStore for MemoryNoteStore {
    fn len(&self) -> Result<usize> {
        Ok(self.entries.len())
    }

    fn key(&self, index: usize) -> Result<Option<String>> {
        Ok(self.entries.get(index).map(|(k, _)| k.clone()))
    }

    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone()))
    }
}
