//! Error types for settings operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for settings operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings root was not a JSON object.
    #[error("settings document must be a JSON object")]
    InvalidDocument,
    /// Field contained an invalid value.
    #[error("invalid value for settings field '{field}': {reason}")]
    InvalidField {
        /// Field that failed validation.
        field: String,
        /// Offending value when available.
        value: Option<String>,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// Field is not recognised.
    #[error("unknown settings field '{field}'")]
    UnknownField {
        /// Name of the unexpected field.
        field: String,
    },
    /// Settings file could not be parsed as JSON.
    #[error("settings file is not valid JSON")]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Source JSON error.
        source: serde_json::Error,
    },
    /// File system operation failed.
    #[error("settings filesystem operation failed")]
    Io {
        /// Operation identifier.
        operation: &'static str,
        /// File involved in the operation.
        path: PathBuf,
        /// Source IO error.
        source: io::Error,
    },
}

/// Convenience alias for settings results.
pub type ConfigResult<T> = Result<T, ConfigError>;
