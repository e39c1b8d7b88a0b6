//! Fuzzy search and relevance ranking for Foundly posts.
//!
//! This crate provides:
//! - Query preprocessing with quoted phrases and synonym expansion
//! - Bounded Levenshtein matching with early abandonment
//! - Multi-field weighted scoring with stable, deterministic ranking
//! - Optional parallel scoring and WASM bindings
//!
//! The pipeline is pure: it performs no I/O, never mutates its inputs, and a
//! single [`SearchEngine`] serves concurrent searches without locks.
//!
//! # Example
//!
//! ```
//! use foundly_core::Post;
//! use foundly_search::SearchEngine;
//!
//! let engine = SearchEngine::new();
//! let posts = vec![
//!     Post::new("p1", "Lost MacBook charger").with_tags(["electronics"]),
//!     Post::new("p2", "Found red scarf"),
//! ];
//!
//! // Typos and synonyms both resolve: "laptop" reaches "MacBook"
//! let results = engine.search(&posts, "laptop");
//! assert_eq!(results[0].id, "p1");
//! ```

mod engine;
mod error;
mod field;
mod fuzzy;
mod query;
mod rank;
mod score;
mod synonyms;

#[cfg(feature = "wasm")]
mod wasm;

pub use engine::SearchEngine;
pub use error::{Result, SearchError};
pub use field::SearchField;
pub use fuzzy::{edit_distance, is_fuzzy_match, levenshtein_within, DEFAULT_FUZZY_THRESHOLD};
pub use query::parse_query;
pub use score::{match_kind, score_post, MatchKind};
pub use synonyms::SynonymGraph;
