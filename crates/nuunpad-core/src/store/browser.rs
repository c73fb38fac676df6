//! Browser local storage as a note store.

use web_sys::Storage;

use crate::error::{NuunpadError, Result};

use super::traits::NoteStore;

/// Note store backed by the window's `localStorage`.
pub struct LocalStorageNoteStore {
    storage: Storage,
}

impl LocalStorageNoteStore {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Bind to the current window's local storage.
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| NuunpadError::Store("No window available".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| NuunpadError::Store(format!("localStorage unavailable: {:?}", e)))?
            .ok_or_else(|| NuunpadError::Store("localStorage is disabled".to_string()))?;
        Ok(Self::new(storage))
    }
}

impl NoteStore for LocalStorageNoteStore {
    fn len(&self) -> Result<usize> {
        self.storage
            .length()
            .map(|n| n as usize)
            .map_err(|e| NuunpadError::Store(format!("localStorage.length failed: {:?}", e)))
    }

    fn key(&self, index: usize) -> Result<Option<String>> {
        let index = u32::try_from(index)
            .map_err(|_| NuunpadError::Store(format!("Index out of range: {}", index)))?;
        self.storage
            .key(index)
            .map_err(|e| NuunpadError::Store(format!("localStorage.key failed: {:?}", e)))
    }

    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| NuunpadError::Store(format!("localStorage.getItem failed: {:?}", e)))
    }
}
