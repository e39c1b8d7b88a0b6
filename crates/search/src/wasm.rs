//! WASM bindings for post search.
//!
//! One engine is built lazily and reused across calls, so the synonym graph
//! is constructed once per module instance just like in native callers.

use crate::{SearchEngine, DEFAULT_FUZZY_THRESHOLD};
use once_cell::sync::Lazy;
use wasm_bindgen::prelude::*;

static ENGINE: Lazy<SearchEngine> = Lazy::new(SearchEngine::new);

/// Search a JSON array of post documents and return ranked posts as JSON.
///
/// # Arguments
/// * `query` - Free-text query, may contain double-quoted phrases
/// * `posts_json` - JSON array of post documents
///
/// # Returns
/// JSON array of matching posts ordered by relevance; `"[]"` for a blank
/// query, an empty corpus, or a malformed payload.
#[wasm_bindgen]
pub fn search_posts(query: &str, posts_json: &str) -> String {
    ENGINE
        .search_json(posts_json, query)
        .unwrap_or_else(|_| "[]".to_string())
}

/// Check whether two strings are within the default edit-distance threshold.
#[wasm_bindgen]
pub fn fuzzy_match(a: &str, b: &str) -> bool {
    crate::is_fuzzy_match(a, b, DEFAULT_FUZZY_THRESHOLD)
}

/// Bounded edit distance; returns `threshold + 1` when the distance
/// definitely exceeds the threshold.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str, threshold: usize) -> usize {
    crate::edit_distance(a, b, threshold)
}
