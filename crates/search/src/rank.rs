//! Result ranking.

use foundly_core::Post;

/// A post paired with its relevance score, alive for one search call only.
#[derive(Debug, Clone)]
pub(crate) struct ScoredPost {
    pub post: Post,
    pub score: u32,
}

/// Drops zero-score posts and orders the rest by descending score.
///
/// The sort is stable with no secondary key, so ties keep their original
/// input order and repeated searches over the same snapshot are
/// deterministic. Scores stay internal; only posts come back.
pub(crate) fn rank(mut scored: Vec<ScoredPost>) -> Vec<Post> {
    scored.retain(|entry| entry.score > 0);
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.into_iter().map(|entry| entry.post).collect()
}
