//! Note store abstraction and implementations.
//!
//! Notes live in a host-owned key-value store. This module defines the
//! read-only view the exporter needs and the stores that provide it.

mod memory;
mod snapshot;
mod traits;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;

pub use memory::MemoryNoteStore;
pub use snapshot::{load_snapshot, parse_snapshot};
pub use traits::NoteStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::LocalStorageNoteStore;
