//! Path and setting resolution for the CLI.
//!
//! Precedence is always: command-line flag, then environment, then config
//! file, then built-in default.

use std::path::{Path, PathBuf};

use nuunpad_core::store::load_snapshot;
use nuunpad_core::{ConflictPolicy, MemoryNoteStore};

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, NuunpadConfig};
use crate::constants::CONFIG_ENV;
use crate::errors::CliError;

/// Resolve the config file path, checking NUUNPAD_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file, or defaults if none exists.
pub fn load_config() -> anyhow::Result<NuunpadConfig> {
    let path = resolve_config_path()?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(NuunpadConfig::default());
    }
    read_config(&path)
}

/// Resolve the note store snapshot path from CLI args or config.
pub fn resolve_store_path(cli: &Cli, config: &NuunpadConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.store.as_deref() {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config.store.path.as_deref() {
        return Ok(PathBuf::from(path));
    }
    Err(CliError::not_found(
        "No note store configured",
        "Hint: pass --store <PATH>, set NUUNPAD_STORE, or add [store] path to the config file",
    )
    .into())
}

/// Load the note store the command should read.
pub fn open_store(cli: &Cli, config: &NuunpadConfig) -> anyhow::Result<MemoryNoteStore> {
    let path = resolve_store_path(cli, config)?;
    if !path.exists() {
        return Err(CliError::not_found(
            missing_store_message(&path),
            "Hint: export local storage from the browser as a JSON object and pass it with --store",
        )
        .into());
    }
    Ok(load_snapshot(&path)?)
}

/// Resolve the export directory from CLI args or config.
pub fn resolve_output_dir(flag: Option<&str>, config: &NuunpadConfig) -> PathBuf {
    flag.or(config.export.output_dir.as_deref())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolve the conflict policy from CLI args or config.
pub fn resolve_conflict_policy(
    flag: Option<&str>,
    config: &NuunpadConfig,
) -> anyhow::Result<ConflictPolicy> {
    match flag {
        Some(value) => value
            .parse::<ConflictPolicy>()
            .map_err(|e| anyhow::Error::new(CliError::invalid_input(e.to_string()))),
        None => Ok(config.export.on_conflict),
    }
}

/// Error message when the store snapshot is missing.
pub fn missing_store_message(path: &Path) -> String {
    format!("No note store found at {}", path.display())
}
