//! Error types for taskbook
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (empty description, bad date, index out of range)
//! - 3: Data error (malformed record in the backing file under strict decode)
//! - 4: Operation failed (I/O failure)

use thiserror::Error;

/// Exit codes for the taskbook CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const DATA_ERROR: i32 = 3;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for taskbook operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("The description of {0} cannot be empty")]
    EmptyDescription(&'static str),

    #[error("No keyword provided")]
    EmptyKeyword,

    #[error("Index must be greater than 0")]
    NegativeIndex,

    #[error("You only have {length} tasks")]
    IndexOutOfRange { length: usize },

    #[error("Invalid date '{0}': dates must be given as YYYY-MM-DD")]
    DateFormat(String),

    // Data errors (exit code 3)
    #[error("Malformed record at line {line}: {reason}")]
    Decode { line: usize, reason: String },

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Cannot determine a data directory on this platform")]
    NoDataDir,
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors
            Error::EmptyDescription(_)
            | Error::EmptyKeyword
            | Error::NegativeIndex
            | Error::IndexOutOfRange { .. }
            | Error::DateFormat(_) => exit_codes::USER_ERROR,

            // Data errors
            Error::Decode { .. } => exit_codes::DATA_ERROR,

            // Operation failures
            Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_)
            | Error::NoDataDir => exit_codes::OPERATION_FAILED,
        }
    }

    /// Structured details for JSON error output, where the variant carries any
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::IndexOutOfRange { length } => {
                Some(serde_json::json!({ "length": length }))
            }
            Error::Decode { line, reason } => {
                Some(serde_json::json!({ "line": line, "reason": reason }))
            }
            _ => None,
        }
    }
}

/// Result type alias for taskbook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wrapper for displaying errors in JSON format
#[derive(serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            error: err.to_string(),
            code: err.exit_code(),
            details: err.details(),
        }
    }
}
