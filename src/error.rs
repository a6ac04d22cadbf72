//! Error types for the Suggestive library.
//!
//! This module provides error handling for all Suggestive operations.
//! All errors are represented by the [`SuggestiveError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use suggestive::error::{Result, SuggestiveError};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(SuggestiveError::missing_field("score", "42"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Suggestive operations.
///
/// This enum represents all possible errors that can occur in the Suggestive
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum SuggestiveError {
    /// I/O errors (file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A document handed to `index` lacks a declared field.
    #[error("document '{doc_id}' is missing field '{field}'")]
    MissingField {
        /// The declared field that was absent.
        field: String,
        /// Identifier of the offending document, or `"?"` when the
        /// identifier field itself is the one missing.
        doc_id: String,
    },

    /// The score field held a value that cannot order a posting list.
    #[error("document '{doc_id}' has a non-numeric score in field '{field}'")]
    InvalidScore {
        /// The declared score field.
        field: String,
        /// Identifier of the offending document.
        doc_id: String,
    },

    /// A stored document body failed to deserialize.
    ///
    /// Never skipped silently: a skipped record would shift every later
    /// page window.
    #[error("corrupt document body: {0}")]
    CorruptDocument(String),

    /// The storage backend could not be reached.
    ///
    /// Propagated unmodified; retry policy belongs to the network client,
    /// not this engine.
    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Storage-related errors other than connectivity.
    #[error("storage error: {0}")]
    Storage(String),

    /// Generic error for other cases
    #[error("error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SuggestiveError.
pub type Result<T> = std::result::Result<T, SuggestiveError>;

impl SuggestiveError {
    /// Create a new missing-field error.
    pub fn missing_field<F: Into<String>, D: Into<String>>(field: F, doc_id: D) -> Self {
        SuggestiveError::MissingField {
            field: field.into(),
            doc_id: doc_id.into(),
        }
    }

    /// Create a new invalid-score error.
    pub fn invalid_score<F: Into<String>, D: Into<String>>(field: F, doc_id: D) -> Self {
        SuggestiveError::InvalidScore {
            field: field.into(),
            doc_id: doc_id.into(),
        }
    }

    /// Create a new corrupt-document error.
    pub fn corrupt<S: Into<String>>(msg: S) -> Self {
        SuggestiveError::CorruptDocument(msg.into())
    }

    /// Create a new backend-unavailable error.
    pub fn unavailable<S: Into<String>>(msg: S) -> Self {
        SuggestiveError::BackendUnavailable(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        SuggestiveError::Storage(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SuggestiveError::Other(msg.into())
    }
}

impl From<serde_json::Error> for SuggestiveError {
    fn from(err: serde_json::Error) -> Self {
        SuggestiveError::CorruptDocument(err.to_string())
    }
}
