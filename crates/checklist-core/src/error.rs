//! Error types for the checklist reshaper
//!
//! All fallible operations return `Result<T, Error>`.
//! A malformed record aborts the whole batch; there is no per-category recovery.

use thiserror::Error;

/// Checklist error types
#[derive(Debug, Error)]
pub enum Error {
    /// The document root is not a JSON array of categories
    #[error("Expected a JSON array of categories")]
    NotAnArray,

    /// A category record is not a JSON object
    #[error("Category #{index} is not an object")]
    NotAnObject { index: usize },

    /// A category lacks the field the selected mode reads
    #[error("Category '{category}' is missing field '{field}'")]
    MissingField {
        category: String,
        field: &'static str,
    },

    /// An element of the source collection has the wrong shape
    #[error("Category '{category}' has an invalid entry at {field}[{index}]")]
    InvalidEntry {
        category: String,
        field: &'static str,
        index: usize,
    },

    /// JSON syntax or serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for errors caused by record shape rather than JSON syntax
    pub fn is_malformed_record(&self) -> bool {
        !matches!(self, Error::Json(_))
    }
}

/// Result type alias for checklist operations
pub type Result<T> = std::result::Result<T, Error>;
