//! Directory sink: the native counterpart of a browser download.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NuunpadError, Result};
use crate::fs::{write_atomic, write_first_free};

use super::traits::{DeliveryReceipt, FileSink};

/// Highest `n` tried for `name (n).ext` before giving up.
const MAX_SUFFIX_ATTEMPTS: u32 = 1000;

/// What to do when the target file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Pick `name (1).json`, `name (2).json`, ... like a browser download
    #[default]
    Suffix,
    /// Replace the existing file
    Overwrite,
    /// Refuse to deliver
    Fail,
}

impl FromStr for ConflictPolicy {
    type Err = NuunpadError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "suffix" => Ok(Self::Suffix),
            "overwrite" => Ok(Self::Overwrite),
            "fail" => Ok(Self::Fail),
            other => Err(NuunpadError::InvalidInput(format!(
                "Unknown conflict policy: {} (use suffix, overwrite or fail)",
                other
            ))),
        }
    }
}

/// Sink that writes each delivery as a file inside a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    policy: ConflictPolicy,
    last_path: Option<PathBuf>,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            policy: ConflictPolicy::default(),
            last_path: None,
        }
    }

    pub fn with_policy(mut self, policy: ConflictPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the most recent successful delivery.
    pub fn last_path(&self) -> Option<&Path> {
        self.last_path.as_deref()
    }

    /// Place `bytes` under `filename` according to the conflict policy.
    ///
    /// Only `Overwrite` may replace a file. `Fail` and `Suffix` claim their target
    /// without clobbering, so a file created concurrently is never lost.
    fn place(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
        let write_failed = |path: &Path, e: std::io::Error| {
            NuunpadError::Sink(format!("Failed to write {}: {}", path.display(), e))
        };

        let target = self.dir.join(filename);
        match self.policy {
            ConflictPolicy::Overwrite => {
                write_atomic(&target, bytes).map_err(|e| write_failed(&target, e))?;
                Ok(target)
            }
            ConflictPolicy::Fail => write_first_free([target.clone()], bytes)
                .map_err(|e| write_failed(&target, e))?
                .ok_or_else(|| {
                    NuunpadError::Sink(format!(
                        "Refusing to overwrite existing file {}",
                        target.display()
                    ))
                }),
            ConflictPolicy::Suffix => {
                let candidates = suffixed_names(filename).map(|name| self.dir.join(name));
                write_first_free(candidates, bytes)
                    .map_err(|e| write_failed(&target, e))?
                    .ok_or_else(|| {
                        NuunpadError::Sink(format!(
                            "No free file name for {} in {}",
                            filename,
                            self.dir.display()
                        ))
                    })
            }
        }
    }
}

impl FileSink for DirectorySink {
    fn deliver(
        &mut self,
        filename: &str,
        bytes: &[u8],
        _mime_type: &str,
    ) -> Result<DeliveryReceipt> {
        if filename.is_empty() || filename.contains(['/', '\\']) {
            return Err(NuunpadError::InvalidInput(format!(
                "Invalid export file name: {:?}",
                filename
            )));
        }

        std::fs::create_dir_all(&self.dir).map_err(|e| {
            NuunpadError::Sink(format!(
                "Failed to create export directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let target = self.place(filename, bytes)?;

        tracing::debug!(path = %target.display(), bytes = bytes.len(), "wrote export file");
        let receipt = DeliveryReceipt::new(target.display().to_string());
        self.last_path = Some(target);
        Ok(receipt)
    }
}

/// `name.ext`, then `name (1).ext`, `name (2).ext`, ... like a browser download.
fn suffixed_names(filename: &str) -> impl Iterator<Item = String> + '_ {
    let (stem, extension) = split_extension(filename);
    std::iter::once(filename.to_string()).chain(
        (1..=MAX_SUFFIX_ATTEMPTS).map(move |n| format!("{} ({}){}", stem, n, extension)),
    )
}

/// Split `name.ext` into (`name`, `.ext`); names without an extension keep an empty one.
fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(0) | None => (filename, ""),
        Some(index) => filename.split_at(index),
    }
}
