//! Error types for Nuunpad core operations.
//!
//! Every failure raised by a note store or a file sink surfaces as a
//! `NuunpadError`; nothing is retried or swallowed. The CLI layer maps these
//! to exit codes and user-facing messages.

use thiserror::Error;

/// Result type alias for Nuunpad operations.
pub type Result<T> = std::result::Result<T, NuunpadError>;

/// Core error type for Nuunpad operations.
#[derive(Debug, Error)]
pub enum NuunpadError {
    /// The note store could not be read
    #[error("Store error: {0}")]
    Store(String),

    /// The file sink could not deliver the export
    #[error("Sink error: {0}")]
    Sink(String),

    /// Export bundle could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for NuunpadError {
    fn from(err: std::io::Error) -> Self {
        NuunpadError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for NuunpadError {
    fn from(err: serde_json::Error) -> Self {
        NuunpadError::Serialization(err.to_string())
    }
}
