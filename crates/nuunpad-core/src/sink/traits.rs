use serde::Serialize;

use crate::error::Result;

/// Destination for a finished export.
pub trait FileSink {
    /// Deliver `bytes` under the suggested `filename`.
    ///
    /// # Errors
    ///
    /// Returns `NuunpadError::Sink` (or `NuunpadError::Io`) if the bytes could not be
    /// handed over. No partial delivery is reported as success.
    fn deliver(&mut self, filename: &str, bytes: &[u8], mime_type: &str)
        -> Result<DeliveryReceipt>;
}

impl<K: FileSink + ?Sized> FileSink for &mut K {
    fn deliver(
        &mut self,
        filename: &str,
        bytes: &[u8],
        mime_type: &str,
    ) -> Result<DeliveryReceipt> {
        (**self).deliver(filename, bytes, mime_type)
    }
}

/// Where a sink put the bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryReceipt {
    /// Human-readable location: a file path, `stdout`, `memory` or `browser download`
    pub location: String,
}

impl DeliveryReceipt {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}
