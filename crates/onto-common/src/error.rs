//! Error types for the ontology toolkit

use thiserror::Error;

/// Result type alias for ontology operations
pub type Result<T> = std::result::Result<T, OntoError>;

/// Main error type for the ontology toolkit
///
/// Loading an ontology never produces one of these: the loader degrades to an
/// empty or partial index instead. Errors come from the surrounding work
/// (reading files, decoding pathway JSON, writing tables and documents).
#[derive(Error, Debug)]
pub enum OntoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("TSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown class: '{0}'. Use 'onto search' to find the identifier of a class.")]
    UnknownClass(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl OntoError {
    /// Create an unknown class error
    pub fn unknown_class(id: impl Into<String>) -> Self {
        Self::UnknownClass(id.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
