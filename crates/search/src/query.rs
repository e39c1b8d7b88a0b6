//! Query preprocessing.
//!
//! Turns a raw user query into a flat set of normalized keywords: quoted
//! phrases first, then whitespace-separated tokens, everything lower-cased,
//! and each keyword's synonym expansion unioned into the same set.

use crate::SynonymGraph;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Double-quoted spans become single phrase keywords.
static QUOTED_PHRASE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]*)""#).unwrap());

/// Parses a raw query into a keyword set.
///
/// A blank query yields an empty set — that means "no query", not an error.
/// Phrase keywords keep their internal spaces; duplicates collapse; there is
/// no ordering guarantee.
///
/// # Arguments
/// * `raw` - The query as typed by the user
/// * `synonyms` - Graph used to widen each keyword
///
/// # Example
/// ```
/// use foundly_search::{parse_query, SynonymGraph};
///
/// let graph = SynonymGraph::default();
/// let keywords = parse_query(r#"lost "blue bottle" phone"#, &graph);
///
/// assert!(keywords.contains("blue bottle"));
/// assert!(keywords.contains("cellphone")); // synonym of "phone"
/// ```
pub fn parse_query(raw: &str, synonyms: &SynonymGraph) -> HashSet<String> {
    let mut keywords = HashSet::new();

    if raw.trim().is_empty() {
        return keywords;
    }

    // Quoted spans first, quotes stripped, internal spaces preserved
    for capture in QUOTED_PHRASE.captures_iter(raw) {
        let phrase = capture[1].trim().to_lowercase();
        if !phrase.is_empty() {
            keywords.insert(phrase);
        }
    }

    // Everything outside the quotes splits on whitespace
    let remainder = QUOTED_PHRASE.replace_all(raw, " ");
    for token in remainder.split_whitespace() {
        keywords.insert(token.to_lowercase());
    }

    // Union each keyword's expansion into the same flat set
    let mut expanded = HashSet::new();
    for keyword in &keywords {
        expanded.extend(synonyms.expand(keyword));
    }
    keywords.extend(expanded);

    keywords
}
