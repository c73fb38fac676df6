use crate::error::Result;

use super::traits::{DeliveryReceipt, FileSink};

/// A single recorded delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl Delivery {
    /// The delivered bytes as text (exports are always UTF-8).
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// Sink that keeps every delivery in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    deliveries: Vec<Delivery>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    pub fn last(&self) -> Option<&Delivery> {
        self.deliveries.last()
    }
}

impl FileSink for MemorySink {
    fn deliver(
        &mut self,
        filename: &str,
        bytes: &[u8],
        mime_type: &str,
    ) -> Result<DeliveryReceipt> {
        self.deliveries.push(Delivery {
            filename: filename.to_string(),
            bytes: bytes.to_vec(),
            mime_type: mime_type.to_string(),
        });
        Ok(DeliveryReceipt::new("memory"))
    }
}
