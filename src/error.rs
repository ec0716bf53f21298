//! Custom error types for NixCI
//!
//! Infrastructure failures (configuration, file I/O, serialization, terminal)
//! live here. Field validation failures are ordinary data carried by
//! [`crate::validation::ValidationErrors`] and never surface as this type.

use thiserror::Error;

/// The main error type for NixCI operations
#[derive(Error, Debug)]
pub enum NixciError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// A value of the wrong kind was supplied for a draft field
    #[error("Validation error: {0}")]
    Validation(String),

    /// A draft failed one or more wizard steps
    #[error("Draft rejected at {failed_steps} step(s)")]
    DraftRejected { failed_steps: usize },

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl NixciError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::DraftRejected { .. })
    }
}

impl From<std::io::Error> for NixciError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for NixciError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for NixciError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for NixCI operations
pub type NixciResult<T> = Result<T, NixciError>;
