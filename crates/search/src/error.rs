//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur at the search crate's boundaries.
///
/// The pipeline itself never fails: blank queries and empty corpora yield
/// empty results, and absent post fields are treated as empty strings. Only
/// the JSON boundary can reject its input.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Posts payload could not be decoded
    #[error("Invalid posts payload: {0}")]
    InvalidPosts(#[from] serde_json::Error),
}
