//! Snapshot files: a JSON object dump of browser local storage.
//!
//! ```json
//! {
//!   "note-1700000000000": "groceries",
//!   "theme": "dark"
//! }
//! ```
//!
//! Key order in the document becomes the store's enumeration order.

use std::path::Path;

use crate::error::{NuunpadError, Result};

use super::memory::MemoryNoteStore;

/// Parse a snapshot document into a store.
///
/// # Errors
///
/// Returns `NuunpadError::Store` if the document is not a JSON object or any
/// value is not a string.
pub fn parse_snapshot(text: &str) -> Result<MemoryNoteStore> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| NuunpadError::Store(format!("Invalid snapshot JSON: {}", e)))?;
    let object = match value {
        serde_json::Value::Object(object) => object,
        other => {
            return Err(NuunpadError::Store(format!(
                "Snapshot must be a JSON object of string values, found {}",
                json_kind(&other)
            )))
        }
    };

    let mut store = MemoryNoteStore::new();
    for (key, value) in object {
        match value {
            serde_json::Value::String(text) => store.set_item(key, text),
            other => {
                return Err(NuunpadError::Store(format!(
                    "Snapshot value for \"{}\" must be a string, found {}",
                    key,
                    json_kind(&other)
                )))
            }
        }
    }
    Ok(store)
}

/// Read and parse a snapshot file.
///
/// # Errors
///
/// Returns `NuunpadError::NotFound` if the file does not exist, `NuunpadError::Io`
/// if it cannot be read, and `NuunpadError::Store` if its contents are invalid.
pub fn load_snapshot(path: &Path) -> Result<MemoryNoteStore> {
    if !path.exists() {
        return Err(NuunpadError::NotFound(format!(
            "No note store snapshot at {}",
            path.display()
        )));
    }
    let text = std::fs::read_to_string(path).map_err(|e| {
        NuunpadError::Io(format!("Failed to read snapshot {}: {}", path.display(), e))
    })?;
    let store = parse_snapshot(&text)?;
    tracing::debug!(path = %path.display(), entries = store.entries().len(), "loaded snapshot");
    Ok(store)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
