//! Error types for the onto CLI
//!
//! Messages are user-facing and say what to try next.

use onto_common::OntoError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    /// Loading, querying or writing ontology data failed
    #[error(transparent)]
    Onto(#[from] OntoError),

    /// The requested class is not in the loaded document
    #[error("Class not found: '{0}'. Run 'onto search <FILE> <TERM>' to find class identifiers.")]
    ClassNotFound(String),

    /// File system operation failed
    #[error("File operation failed: {0}. Check the path and file permissions.")]
    Io(#[from] std::io::Error),

    /// Rendering JSON output failed
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables or .env file.")]
    Config(String),
}

impl CliError {
    /// Create a class-not-found error
    pub fn class_not_found(id: impl Into<String>) -> Self {
        Self::ClassNotFound(id.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
