//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and by clap for usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (config, store snapshot).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// The export could not be delivered.
    pub const EXPORT_FAILED: i32 = 5;
}

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "NUUNPAD_CONFIG";

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";
