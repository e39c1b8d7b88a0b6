//! Error types for the core crate.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur in the core domain layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Post store could not be read
    #[error("Post store error: {0}")]
    Store(String),

    /// A document from the store could not be decoded
    #[error("Malformed post document: {0}")]
    MalformedDocument(#[from] serde_json::Error),
}
