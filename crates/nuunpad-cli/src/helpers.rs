//! Input and parsing helper functions for the CLI.

use chrono::{DateTime, Local, NaiveDateTime};

use crate::errors::CliError;

const LOCAL_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse an export timestamp as local wall-clock time.
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS]`, `YYYY-MM-DD HH:MM[:SS]`, or a full RFC 3339
/// timestamp, which is converted into the local timezone.
pub fn parse_local_datetime(value: &str) -> anyhow::Result<NaiveDateTime> {
    let value = value.trim();
    for format in LOCAL_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Local).naive_local());
    }

    Err(CliError::invalid_input(format!(
        "Invalid date/time (expected YYYY-MM-DDTHH:MM or RFC 3339): {}",
        value
    ))
    .into())
}

/// Single-line preview of note content, truncated to `max_chars`.
pub fn preview(content: &str, max_chars: usize) -> String {
    let flattened: String = content
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let trimmed = flattened.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_minutes_precision() {
        let parsed = parse_local_datetime("2024-03-07T09:05").unwrap();
        assert_eq!((parsed.day(), parsed.month(), parsed.year()), (7, 3, 2024));
        assert_eq!((parsed.hour(), parsed.minute()), (9, 5));
    }

    #[test]
    fn test_parse_space_separator_with_seconds() {
        let parsed = parse_local_datetime("2024-03-07 09:05:59").unwrap();
        assert_eq!(parsed.second(), 59);
    }

    #[test]
    fn test_parse_rfc3339() {
        assert!(parse_local_datetime("2024-03-07T09:05:00Z").is_ok());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_local_datetime("yesterday").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_preview_flattens_and_truncates() {
        assert_eq!(preview("one\ntwo", 20), "one two");
        assert_eq!(preview("abcdefghij", 8), "abcde...");
        assert_eq!(preview("short", 8), "short");
    }
}
