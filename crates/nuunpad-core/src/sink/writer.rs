use std::io::Write;

use crate::error::{NuunpadError, Result};

use super::traits::{DeliveryReceipt, FileSink};

/// Sink that streams the bytes to a writer, ignoring the suggested filename.
pub struct WriterSink<W: Write> {
    writer: W,
    label: String,
    trailing_newline: bool,
}

impl<W: Write> WriterSink<W> {
    /// Wrap `writer`; `label` names it in receipts (e.g. `stdout`).
    pub fn new(writer: W, label: impl Into<String>) -> Self {
        Self {
            writer,
            label: label.into(),
            trailing_newline: false,
        }
    }

    /// Terminate the output with a newline (for terminals).
    pub fn with_trailing_newline(mut self, enabled: bool) -> Self {
        self.trailing_newline = enabled;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout(), "stdout").with_trailing_newline(true)
    }
}

impl<W: Write> FileSink for WriterSink<W> {
    fn deliver(
        &mut self,
        filename: &str,
        bytes: &[u8],
        _mime_type: &str,
    ) -> Result<DeliveryReceipt> {
        let newline: &[u8] = if self.trailing_newline { b"\n" } else { b"" };
        self.writer
            .write_all(bytes)
            .and_then(|_| self.writer.write_all(newline))
            .and_then(|_| self.writer.flush())
            .map_err(|e| {
                NuunpadError::Sink(format!("Failed to write {} to {}: {}", filename, self.label, e))
            })?;
        Ok(DeliveryReceipt::new(self.label.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_bytes_verbatim() {
        let mut sink = WriterSink::new(Vec::new(), "buffer");
        let receipt = sink.deliver("x.json", b"{}", "application/json").unwrap();

        assert_eq!(receipt.location, "buffer");
        assert_eq!(sink.into_inner(), b"{}");
    }

    #[test]
    fn test_trailing_newline() {
        let mut sink = WriterSink::new(Vec::new(), "buffer").with_trailing_newline(true);
        sink.deliver("x.json", b"{}", "application/json").unwrap();

        assert_eq!(sink.into_inner(), b"{}\n");
    }
}
