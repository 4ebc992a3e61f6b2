//! Ontology Toolkit Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared error handling and logging for the ontology toolkit workspace.
//!
//! - **Error Handling**: [`OntoError`] and the [`Result`] alias
//! - **Logging**: [`logging::LogConfig`] and [`logging::init_logging`]
//!
//! # Example
//!
//! ```no_run
//! use onto_common::{OntoError, Result};
//!
//! fn read_document(path: &str) -> Result<String> {
//!     let text = std::fs::read_to_string(path)?;
//!     if text.trim().is_empty() {
//!         return Err(OntoError::parse(format!("{} is empty", path)));
//!     }
//!     Ok(text)
//! }
//! ```

pub mod error;
pub mod logging;

pub use error::{OntoError, Result};
