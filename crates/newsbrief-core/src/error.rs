//! Error types and exit codes for newsbrief
//!
//! The summarization engine itself never fails. Errors only arise on the
//! surfaces around it: configuration, input files, JSON payloads and CLI usage.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid config values)
//! - 3: Data error (unreadable or malformed article input)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the newsbrief binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed article input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur around summarization
#[derive(Error, Debug)]
pub enum BriefError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid article input from {source_name}: {reason}")]
    InvalidInput { source_name: String, reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {}: {reason}", .path.display())]
    Config {
        operation: String,
        path: PathBuf,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl BriefError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        BriefError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for article input that could not be understood
    pub fn invalid_input(
        source_name: impl std::fmt::Display,
        reason: impl std::fmt::Display,
    ) -> Self {
        BriefError::InvalidInput {
            source_name: source_name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        BriefError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed config file operation
    pub fn config(
        operation: &str,
        path: impl Into<PathBuf>,
        error: impl std::fmt::Display,
    ) -> Self {
        BriefError::Config {
            operation: operation.to_string(),
            path: path.into(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            BriefError::UnknownFormat(_)
            | BriefError::UsageError(_)
            | BriefError::InvalidValue { .. } => ExitCode::Usage,

            BriefError::InvalidInput { .. } | BriefError::NotFound { .. } => ExitCode::Data,

            BriefError::Io(_)
            | BriefError::Json(_)
            | BriefError::Toml(_)
            | BriefError::Config { .. }
            | BriefError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            BriefError::UnknownFormat(_) => "unknown_format",
            BriefError::UsageError(_) => "usage_error",
            BriefError::InvalidValue { .. } => "invalid_value",
            BriefError::InvalidInput { .. } => "invalid_input",
            BriefError::NotFound { .. } => "not_found",
            BriefError::Io(_) => "io_error",
            BriefError::Json(_) => "json_error",
            BriefError::Toml(_) => "toml_error",
            BriefError::Config { .. } => "config_error",
            BriefError::Other(_) => "other",
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

/// Result type alias for newsbrief operations
pub type Result<T> = std::result::Result<T, BriefError>;
