//! Error types and exit codes for paperrec
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid article selection)
//! - 3: Data error (missing CSV columns, unreadable corpus)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the paperrec binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed or empty corpus (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading a corpus or producing recommendations
#[derive(Error, Debug)]
pub enum RecommendError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid selection: {index} (corpus has {len} articles)")]
    InvalidSelection { index: usize, len: usize },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("missing required field '{field}' in {path:?}")]
    MissingField { field: String, path: PathBuf },

    #[error("malformed record at line {line} in {path:?}: {reason}")]
    CsvParse {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("corpus is empty")]
    EmptyCorpus,

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl RecommendError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RecommendError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RecommendError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RecommendError::UnknownFormat(_)
            | RecommendError::UsageError(_)
            | RecommendError::InvalidSelection { .. }
            | RecommendError::InvalidValue { .. } => ExitCode::Usage,

            RecommendError::MissingField { .. }
            | RecommendError::CsvParse { .. }
            | RecommendError::EmptyCorpus => ExitCode::Data,

            RecommendError::Io(_)
            | RecommendError::Csv(_)
            | RecommendError::Json(_)
            | RecommendError::Toml(_)
            | RecommendError::FailedOperationWithTarget { .. }
            | RecommendError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RecommendError::UnknownFormat(_) => "unknown_format",
            RecommendError::UsageError(_) => "usage_error",
            RecommendError::InvalidSelection { .. } => "invalid_selection",
            RecommendError::InvalidValue { .. } => "invalid_value",
            RecommendError::MissingField { .. } => "missing_field",
            RecommendError::CsvParse { .. } => "csv_parse",
            RecommendError::EmptyCorpus => "empty_corpus",
            RecommendError::Io(_) => "io_error",
            RecommendError::Csv(_) => "csv_error",
            RecommendError::Json(_) => "json_error",
            RecommendError::Toml(_) => "toml_error",
            RecommendError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            RecommendError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for paperrec operations
pub type Result<T> = std::result::Result<T, RecommendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            RecommendError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            RecommendError::InvalidSelection { index: 9, len: 3 }.exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            RecommendError::MissingField {
                field: "titles".into(),
                path: PathBuf::from("papers.csv"),
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(RecommendError::EmptyCorpus.exit_code(), ExitCode::Data);
        assert_eq!(
            RecommendError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let err = RecommendError::MissingField {
            field: "abstracts".into(),
            path: PathBuf::from("papers.csv"),
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "missing_field");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("abstracts"));
    }

    #[test]
    fn test_exit_code_into_i32() {
        let code: i32 = ExitCode::Data.into();
        assert_eq!(code, 3);
    }
}
