//! File sinks: where a finished export is delivered.
//!
//! A sink receives the synthesized filename, the serialized bytes and a MIME
//! type, and is responsible for making them reachable by the user. The exporter
//! never knows which sink it is bound to.

mod directory;
mod memory;
mod traits;
mod writer;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;

pub use directory::{ConflictPolicy, DirectorySink};
pub use memory::{Delivery, MemorySink};
pub use traits::{DeliveryReceipt, FileSink};
pub use writer::WriterSink;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::BrowserDownloadSink;
