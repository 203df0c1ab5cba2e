//! Error types for the tracker crate.

use thiserror::Error;

/// Defects found while parsing a single stored record line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid {field} '{value}'")]
    InvalidField { field: &'static str, value: String },
}

/// Errors that end the current session.
///
/// Recoverable input mistakes (bad menu choices, rejected dates, wrong
/// passwords) never surface here; they are reported at the prompt instead.
#[derive(Error, Debug, Clone)]
pub enum TrackerError {
    // Record errors
    #[error("Malformed record in {store} at line {line}: {source}")]
    MalformedRecord {
        store: String,
        line: usize,
        #[source]
        source: RecordError,
    },

    #[error("Invalid completion flag: '{value}'")]
    InvalidCompletion { value: String },

    // Storage errors
    #[error("Storage error: {reason}")]
    StorageError { reason: String },

    #[error("Failed to read file '{path}': {reason}")]
    FileReadError { path: String, reason: String },

    #[error("Failed to write file '{path}': {reason}")]
    FileWriteError { path: String, reason: String },

    #[error("Failed to parse JSON: {reason}")]
    JsonParseError { reason: String },

    // Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    // Session errors
    #[error("'{action}' is only available to the admin user")]
    PermissionDenied { action: String },

    // Console errors
    #[error("Console error: {reason}")]
    ConsoleError { reason: String },

    #[error("Input closed before the prompt was answered")]
    InputClosed,
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::StorageError {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParseError {
            reason: err.to_string(),
        }
    }
}

impl From<dialoguer::Error> for TrackerError {
    fn from(err: dialoguer::Error) -> Self {
        Self::ConsoleError {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_record_display() {
        let err = TrackerError::MalformedRecord {
            store: "user store".to_string(),
            line: 3,
            source: RecordError::FieldCount {
                expected: 2,
                found: 1,
            },
        };
        assert_eq!(
            err.to_string(),
            "Malformed record in user store at line 3: expected 2 fields, found 1"
        );
    }

    #[test]
    fn test_malformed_record_keeps_source() {
        use std::error::Error as _;

        let err = TrackerError::MalformedRecord {
            store: "task store".to_string(),
            line: 1,
            source: RecordError::InvalidField {
                field: "due date",
                value: "tomorrow".to_string(),
            },
        };
        let source = err.source().expect("source should be attached");
        assert_eq!(source.to_string(), "invalid due date 'tomorrow'");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: TrackerError = io_err.into();
        assert!(matches!(err, TrackerError::StorageError { .. }));
    }
}
