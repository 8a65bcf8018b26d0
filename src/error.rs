//! Error types for timecard auditing.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition that can occur while loading timecards,
//! reading detection settings, or building shift records.

use thiserror::Error;

/// The main error type for timecard auditing.
///
/// Only [`AuditError::SourceUnavailable`] and the configuration variants are
/// fatal to a run. Row-level variants are recovered where they occur and
/// surfaced as diagnostics.
///
/// # Example
///
/// ```
/// use timecard_audit::error::AuditError;
///
/// let error = AuditError::SourceUnavailable {
///     path: "timecards.csv".to_string(),
///     message: "No such file or directory".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Timecard source 'timecards.csv' is unavailable: No such file or directory"
/// );
/// ```
#[derive(Debug, Error)]
pub enum AuditError {
    /// The timecard source could not be opened or read.
    #[error("Timecard source '{path}' is unavailable: {message}")]
    SourceUnavailable {
        /// The path of the source.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// A timestamp field was non-empty but did not match the expected format.
    #[error("Error parsing date in row {line}: {message}")]
    RowParse {
        /// The 1-based line number of the row (the header is line 1).
        line: usize,
        /// The name of the offending field.
        field: String,
        /// The raw value that failed to parse.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A row of the source could not be decoded at all (e.g. invalid UTF-8).
    #[error("Unreadable row {line}: {message}")]
    UnreadableRow {
        /// The 1-based line number of the row.
        line: usize,
        /// A description of the decoding failure.
        message: String,
    },

    /// A shift violated the shift invariants (e.g. clocked out before clocking in).
    #[error("Invalid shift in row {line}: {message}")]
    InvalidShift {
        /// The 1-based line number of the row, or 0 when not read from a file.
        line: usize,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values detection cannot work with.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// A type alias for Results that return AuditError.
pub type AuditResult<T> = Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_unavailable_displays_path_and_message() {
        let error = AuditError::SourceUnavailable {
            path: "/missing/timecards.csv".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Timecard source '/missing/timecards.csv' is unavailable: permission denied"
        );
    }

    #[test]
    fn test_row_parse_displays_line_and_message() {
        let error = AuditError::RowParse {
            line: 4,
            field: "Time".to_string(),
            value: "13/45/2023 9:00".to_string(),
            message: "input is out of range".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Error parsing date in row 4: input is out of range"
        );
    }

    #[test]
    fn test_unreadable_row_displays_line_and_message() {
        let error = AuditError::UnreadableRow {
            line: 12,
            message: "invalid utf-8".to_string(),
        };
        assert_eq!(error.to_string(), "Unreadable row 12: invalid utf-8");
    }

    #[test]
    fn test_invalid_shift_displays_line_and_message() {
        let error = AuditError::InvalidShift {
            line: 9,
            message: "time out is not after time in".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid shift in row 9: time out is not after time in"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = AuditError::ConfigNotFound {
            path: "/missing/detection.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/detection.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = AuditError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = AuditError::InvalidConfig {
            field: "max_shift_minutes".to_string(),
            message: "must be positive, got 0".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value 'max_shift_minutes': must be positive, got 0"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<AuditError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> AuditResult<()> {
            Err(AuditError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> AuditResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
