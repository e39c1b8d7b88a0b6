//! The search pipeline: preprocess, score, rank.

use crate::fuzzy::DEFAULT_FUZZY_THRESHOLD;
use crate::query::parse_query;
use crate::rank::{rank, ScoredPost};
use crate::score::score_post;
use crate::{Result, SynonymGraph};
use foundly_core::Post;

/// Fuzzy search engine over a post snapshot.
///
/// Owns the one-time-built synonym graph; everything else is call-local, so a
/// single engine can serve concurrent searches from multiple threads without
/// locks. Construct it once and reuse it.
///
/// # Example
/// ```
/// use foundly_core::Post;
/// use foundly_search::SearchEngine;
///
/// let engine = SearchEngine::new();
/// let posts = vec![
///     Post::new("p1", "Lost cellphone"),
///     Post::new("p2", "Found keys"),
/// ];
///
/// let results = engine.search(&posts, "phone");
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].id, "p1");
/// ```
#[derive(Debug, Clone)]
pub struct SearchEngine {
    synonyms: SynonymGraph,
    fuzzy_threshold: usize,
}

impl SearchEngine {
    /// Engine with the curated default synonym graph and threshold 2.
    pub fn new() -> Self {
        Self::with_synonyms(SynonymGraph::default())
    }

    /// Engine with an injected synonym graph.
    pub fn with_synonyms(synonyms: SynonymGraph) -> Self {
        Self {
            synonyms,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }

    /// The synonym graph this engine expands queries with.
    pub fn synonyms(&self) -> &SynonymGraph {
        &self.synonyms
    }

    /// Searches a post snapshot, returning posts ordered by relevance.
    ///
    /// A blank query or an empty snapshot yields an empty vector — never an
    /// error. Posts that match nothing are dropped, not returned with zero
    /// relevance. Neither the posts nor the graph are mutated.
    pub fn search(&self, posts: &[Post], query: &str) -> Vec<Post> {
        let keywords = parse_query(query, &self.synonyms);
        if keywords.is_empty() || posts.is_empty() {
            return Vec::new();
        }

        #[cfg(feature = "parallel")]
        let scored: Vec<ScoredPost> = {
            use rayon::prelude::*;
            posts
                .par_iter()
                .map(|post| ScoredPost {
                    post: post.clone(),
                    score: score_post(post, &keywords, self.fuzzy_threshold),
                })
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let scored: Vec<ScoredPost> = posts
            .iter()
            .map(|post| ScoredPost {
                post: post.clone(),
                score: score_post(post, &keywords, self.fuzzy_threshold),
            })
            .collect();

        rank(scored)
    }

    /// Searches a JSON array of post documents, returning ranked posts as
    /// JSON.
    ///
    /// This is the boundary the WASM bindings and offline tools go through;
    /// it is the only entry point that can fail, and only on malformed input.
    pub fn search_json(&self, posts_json: &str, query: &str) -> Result<String> {
        let posts: Vec<Post> = serde_json::from_str(posts_json)?;
        let ranked = self.search(&posts, query);
        Ok(serde_json::to_string(&ranked)?)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_title_match() {
        let engine = SearchEngine::new();
        let posts = vec![
            Post::new("java", "Java Book"),
            Post::new("python", "Python Book"),
        ];

        assert_eq!(ids(&engine.search(&posts, "Java")), ["java"]);
    }

    #[test]
    fn test_blank_query_yields_empty() {
        let engine = SearchEngine::new();
        let posts = vec![Post::new("p1", "Java Book")];

        assert!(engine.search(&posts, "").is_empty());
        assert!(engine.search(&posts, "   ").is_empty());
    }

    #[test]
    fn test_empty_corpus_yields_empty() {
        let engine = SearchEngine::new();
        assert!(engine.search(&[], "keys").is_empty());
    }

    #[test]
    fn test_synonym_assisted_match() {
        let engine = SearchEngine::new();
        let posts = vec![Post::new("cell", "Cellphone"), Post::new("keys", "Keys")];

        assert_eq!(ids(&engine.search(&posts, "phone")), ["cell"]);
    }

    #[test]
    fn test_typo_matches_fuzzily() {
        let engine = SearchEngine::new();
        let posts = vec![
            Post::new("pc", "Computer").with_tags(["electronics"]),
            Post::new("book", "Book"),
        ];

        assert_eq!(ids(&engine.search(&posts, "computor")), ["pc"]);
    }

    #[test]
    fn test_determinism() {
        let engine = SearchEngine::new();
        let posts: Vec<Post> = (0..20)
            .map(|i| Post::new(format!("p{i}"), "computer charger"))
            .collect();

        let first = engine.search(&posts, "computor");
        let second = engine.search(&posts, "computor");
        assert_eq!(ids(&first), ids(&second));
        // All scores tie, so input order survives
        assert_eq!(ids(&first)[0], "p0");
    }

    #[test]
    fn test_title_outranks_description() {
        let engine = SearchEngine::new();
        let posts = vec![
            Post::new("desc", "Misc items").with_description("a wallet among them"),
            Post::new("title", "Brown wallet"),
        ];

        // Same match kind, but title weight beats description weight
        assert_eq!(ids(&engine.search(&posts, "wallet")), ["title", "desc"]);
    }

    #[test]
    fn test_phrase_query() {
        let engine = SearchEngine::new();
        let posts = vec![
            Post::new("hit", "Bag").with_description("left near the main hall entrance"),
            Post::new("miss", "Bag").with_description("left in the cafeteria"),
        ];

        let results = engine.search(&posts, r#""main hall""#);
        assert_eq!(ids(&results), ["hit"]);
    }

    #[test]
    fn test_unmatched_posts_dropped() {
        let engine = SearchEngine::new();
        let posts = vec![Post::new("keys", "Keys"), Post::new("coat", "Winter coat")];

        let results = engine.search(&posts, "umbrella");
        assert!(results.is_empty());
    }

    #[test]
    fn test_absent_fields_never_panic() {
        let engine = SearchEngine::new();
        let bare: Post = serde_json::from_str(r#"{"id": "bare"}"#).unwrap();

        assert!(engine.search(&[bare], "wallet").is_empty());
    }

    #[test]
    fn test_search_json_roundtrip() {
        let engine = SearchEngine::new();
        let json = r#"[{"id": "p1", "title": "Lost umbrella"}, {"id": "p2", "title": "Keys"}]"#;

        let ranked = engine.search_json(json, "umbrella").unwrap();
        let posts: Vec<Post> = serde_json::from_str(&ranked).unwrap();
        assert_eq!(ids(&posts), ["p1"]);
    }

    #[test]
    fn test_search_json_malformed() {
        let engine = SearchEngine::new();
        assert!(engine.search_json("not json", "keys").is_err());
    }
}
