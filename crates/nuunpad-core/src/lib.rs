//! # Nuunpad Core
//!
//! Core library for exporting Nuunpad notes out of a key-value note store.
//!
//! The browser keeps every note in local storage under a `note-` prefixed key. An
//! export scans that store, collects the matching entries into a single JSON object
//! and hands the bytes to a file sink, named after the moment of export.
//!
//! ## Architecture
//!
//! - **store**: the `NoteStore` trait and its implementations (memory, snapshot file,
//!   browser local storage)
//! - **sink**: the `FileSink` trait and its implementations (memory, writer, directory,
//!   browser download)
//! - **export**: filtering, serialization and filename synthesis
//! - **fs**: atomic file placement used by the directory sink

pub mod error;
pub mod export;
pub mod fs;
pub mod sink;
pub mod store;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;

pub use error::{NuunpadError, Result};
pub use export::{
    collect_notes, export_all_notes, export_all_notes_at, export_filename, prepare_export,
    ExportBundle, ExportFile, ExportReport, EXPORT_FILE_PREFIX, EXPORT_MIME_TYPE,
    NOTE_KEY_PREFIX,
};
pub use sink::{ConflictPolicy, DeliveryReceipt, DirectorySink, FileSink, MemorySink, WriterSink};
pub use store::{MemoryNoteStore, NoteStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
