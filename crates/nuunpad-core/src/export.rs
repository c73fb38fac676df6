//! Note export: collect, serialize, name and deliver.
//!
//! An export is a single synchronous pass:
//!
//! 1. Walk the store by index and keep entries whose key starts with
//!    [`NOTE_KEY_PREFIX`] and whose value is non-empty.
//! 2. Serialize them as a flat, 2-space indented JSON object.
//! 3. Name the file `nuunpad-notes-DD-MM-YYYY-HH-MM.json` from the local time.
//! 4. Hand the bytes to a [`FileSink`].
//!
//! The sink is only invoked once the whole bundle has been serialized.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::sink::FileSink;
use crate::store::NoteStore;

/// Storage keys with this prefix are notes.
pub const NOTE_KEY_PREFIX: &str = "note-";

/// MIME type attached to every export.
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// Leading part of every export file name.
pub const EXPORT_FILE_PREFIX: &str = "nuunpad-notes-";

const EXPORT_FILE_EXTENSION: &str = ".json";
const EXPORT_TIMESTAMP_FORMAT: &str = "%d-%m-%Y-%H-%M";

/// Notes collected from a store, keyed by storage key.
///
/// Keys keep the position of their first insertion; inserting a key again
/// replaces its content in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExportBundle {
    notes: Map<String, Value>,
}

impl ExportBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, content: String) {
        self.notes.insert(key, Value::String(content));
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.notes.get(key).and_then(Value::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.notes
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|v| (k.as_str(), v)))
    }

    /// Pretty JSON (2-space indentation) as UTF-8 bytes. An empty bundle is `{}`.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}

/// A serialized export ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
    pub note_count: usize,
}

impl ExportFile {
    /// Hand the file to `sink`.
    pub fn deliver_to<K: FileSink + ?Sized>(&self, sink: &mut K) -> Result<ExportReport> {
        let receipt = sink.deliver(&self.filename, &self.bytes, self.mime_type)?;
        Ok(ExportReport {
            filename: self.filename.clone(),
            note_count: self.note_count,
            byte_len: self.bytes.len(),
            location: receipt.location,
        })
    }
}

/// Outcome of a completed export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub filename: String,
    pub note_count: usize,
    pub byte_len: usize,
    pub location: String,
}

/// Collect every non-empty `note-` entry from `store`.
///
/// Keys missing at their index and values missing or empty at lookup time are
/// skipped. Nothing is renamed or rewritten.
///
/// # Errors
///
/// Propagates any error raised by the store.
pub fn collect_notes<S: NoteStore + ?Sized>(store: &S) -> Result<ExportBundle> {
    let count = store.len()?;
    let mut bundle = ExportBundle::new();
    let mut skipped_empty = 0usize;

    for index in 0..count {
        let Some(key) = store.key(index)? else {
            continue;
        };
        if !key.starts_with(NOTE_KEY_PREFIX) {
            continue;
        }
        match store.get_item(&key)? {
            Some(content) if !content.is_empty() => bundle.insert(key, content),
            _ => skipped_empty += 1,
        }
    }

    tracing::debug!(
        scanned = count,
        collected = bundle.len(),
        skipped_empty,
        "collected notes"
    );
    Ok(bundle)
}

/// Export file name for a local wall-clock moment.
///
/// ```
/// use chrono::NaiveDate;
/// use nuunpad_core::export_filename;
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 7)
///     .unwrap()
///     .and_hms_opt(9, 5, 0)
///     .unwrap();
/// assert_eq!(export_filename(&at), "nuunpad-notes-07-03-2024-09-05.json");
/// ```
pub fn export_filename(at: &NaiveDateTime) -> String {
    format!(
        "{}{}{}",
        EXPORT_FILE_PREFIX,
        at.format(EXPORT_TIMESTAMP_FORMAT),
        EXPORT_FILE_EXTENSION
    )
}

/// Collect and serialize the notes in `store` as of local time `at`.
pub fn prepare_export<S: NoteStore + ?Sized>(store: &S, at: &NaiveDateTime) -> Result<ExportFile> {
    let bundle = collect_notes(store)?;
    let bytes = bundle.to_json_bytes()?;
    Ok(ExportFile {
        filename: export_filename(at),
        bytes,
        mime_type: EXPORT_MIME_TYPE,
        note_count: bundle.len(),
    })
}

/// Export every note in `store` to `sink`, named after the current local time.
pub fn export_all_notes<S, K>(store: &S, sink: &mut K) -> Result<ExportReport>
where
    S: NoteStore + ?Sized,
    K: FileSink + ?Sized,
{
    export_all_notes_at(store, sink, &Local::now().naive_local())
}

/// Export every note in `store` to `sink`, named after local time `at`.
pub fn export_all_notes_at<S, K>(store: &S, sink: &mut K, at: &NaiveDateTime) -> Result<ExportReport>
where
    S: NoteStore + ?Sized,
    K: FileSink + ?Sized,
{
    let file = prepare_export(store, at)?;
    let report = file.deliver_to(sink)?;
    tracing::info!(
        filename = %report.filename,
        notes = report.note_count,
        bytes = report.byte_len,
        location = %report.location,
        "exported notes"
    );
    Ok(report)
}
