//! Error handling module for foamcase
//!
//! Provides the library error type using thiserror. Parse errors carry the
//! line they were detected on; filesystem errors are passed through untouched.

use thiserror::Error;

/// Main error type for foamcase
#[derive(Error, Debug)]
pub enum FoamCaseError {
    /// IO errors (walking directories, reading dictionaries, writing scripts)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dictionary grammar errors
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Case study file errors (loading, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for foamcase operations
pub type Result<T> = std::result::Result<T, FoamCaseError>;

impl FoamCaseError {
    /// Create a parse error at the given line
    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: msg.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
