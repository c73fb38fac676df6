//! UI primitives for the Nuunpad CLI.
//!
//! - **Context**: Environment detection (TTY, color, NO_COLOR, TERM)
//! - **Mode**: Output mode resolution (json, plain, rich)
//! - **Theme**: Badge tokens and styles
//! - **Render**: Tables, key-value lines, receipts

mod context;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{badge, receipt, table, Column};
