//! Command handlers, one module per subcommand.

mod config;
mod export;
mod list;
mod misc;

pub use config::handle_config;
pub use export::handle_export;
pub use list::handle_list;
pub use misc::handle_completions;
