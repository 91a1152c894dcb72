//! Custom error types for Mind Reframe
//!
//! Wizard operations themselves never fail (a disabled action is a no-op), so
//! this hierarchy only covers the ambient concerns: configuration, file I/O
//! and the terminal.

use thiserror::Error;

/// The main error type for Mind Reframe operations
#[derive(Error, Debug)]
pub enum ReframeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A value that does not fit the field it was written to
    #[error("Validation error: {0}")]
    Validation(String),

    /// Step number outside 1..=6
    #[error("Invalid step: {0} (expected 1-6)")]
    InvalidStep(u8),
}

impl ReframeError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ReframeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReframeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Mind Reframe operations
pub type ReframeResult<T> = Result<T, ReframeError>;
