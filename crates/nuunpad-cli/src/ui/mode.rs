//! How `nuunpad` prints command results.

/// Output mode for `export` receipts and `list` tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// A single JSON document on stdout
    Json,
    /// `key=value` receipts and tab-separated rows
    #[default]
    Plain,
    /// Badges, bordered tables and note previews
    Rich,
}

impl OutputMode {
    /// Pick the mode from `--json`, `--format` and the terminal.
    ///
    /// `--json` and `--format` are mutually exclusive. `--format table` is honored
    /// even when stdout is piped; without a format, rich output needs a TTY whose
    /// `TERM` is not `dumb`.
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Result<Self, String> {
        match (json_flag, format_flag) {
            (true, Some(_)) => Err("--format cannot be used with --json".to_string()),
            (true, None) => Ok(Self::Json),
            (false, Some("plain")) => Ok(Self::Plain),
            (false, Some("table")) => Ok(Self::Rich),
            (false, Some(other)) => Err(format!(
                "Unsupported format: {} (use table or plain)",
                other
            )),
            (false, None) if is_tty && !term_is_dumb => Ok(Self::Rich),
            (false, None) => Ok(Self::Plain),
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_rich(&self) -> bool {
        matches!(self, Self::Rich)
    }
}
