//! Error types for Edge Media Core
//!
//! Payload mapping never fails: malformed facts degrade to sentinel values.
//! These errors only surface at the boundary, when raw strings, configuration
//! or timestamps are turned into typed inputs.

use thiserror::Error;

/// Result type alias for boundary operations
pub type Result<T> = std::result::Result<T, Error>;

/// Boundary error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown media event type: {0}")]
    UnknownEventType(String),

    #[error("Invalid configuration for '{key}': {reason}")]
    InvalidConfig { key: String, reason: String },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(f64),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidConfig {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Returns the error code for diagnostics
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::UnknownEventType(_) => "UNKNOWN_EVENT_TYPE",
            Error::InvalidConfig { .. } => "INVALID_CONFIG",
            Error::InvalidTimestamp(_) => "INVALID_TIMESTAMP",
            Error::Json(_) => "JSON",
        }
    }
}
