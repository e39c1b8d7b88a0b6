//! Relevance scoring.
//!
//! A post's score is the sum, over every (field, keyword) pair, of the match
//! weight times the field weight. Match precedence is fixed: an exact hit is
//! never downgraded to a phrase or fuzzy one.

use crate::field::SearchField;
use crate::fuzzy::is_fuzzy_match;
use foundly_core::Post;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// How a keyword matched a field, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchKind {
    /// Token within the edit-distance threshold
    Fuzzy = 1,
    /// Multi-word keyword contained as a substring
    Phrase = 2,
    /// Whole field or a whole token equals the keyword
    Exact = 3,
}

impl MatchKind {
    /// Score weight of this match kind.
    #[inline]
    pub fn weight(self) -> u32 {
        self as u32
    }
}

/// Word tokens of a field text: runs of non-word characters are separators.
#[inline]
fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.unicode_words()
}

/// Classifies how `keyword` matches `field_text`, if at all.
///
/// First match wins:
/// 1. Exact — full text equals the keyword, or some token does
/// 2. Phrase — multi-word keyword appears as a substring
/// 3. Fuzzy — best single token within `threshold` edits (not cumulative)
///
/// Both inputs are expected lower-cased.
pub fn match_kind(field_text: &str, keyword: &str, threshold: usize) -> Option<MatchKind> {
    if field_text.is_empty() || keyword.is_empty() {
        return None;
    }

    if field_text == keyword || tokens(field_text).any(|token| token == keyword) {
        return Some(MatchKind::Exact);
    }

    if keyword.contains(char::is_whitespace) && field_text.contains(keyword) {
        return Some(MatchKind::Phrase);
    }

    if tokens(field_text).any(|token| is_fuzzy_match(token, keyword, threshold)) {
        return Some(MatchKind::Fuzzy);
    }

    None
}

/// Total relevance score of a post against an expanded keyword set.
///
/// Zero means no field matched any keyword; such posts are dropped by the
/// ranker.
pub fn score_post(post: &Post, keywords: &HashSet<String>, threshold: usize) -> u32 {
    let mut score = 0;

    for field in SearchField::ALL {
        let text = field.extract(post);
        if text.is_empty() {
            continue;
        }
        for keyword in keywords {
            if let Some(kind) = match_kind(&text, keyword, threshold) {
                score += kind.weight() * field.weight();
            }
        }
    }

    score
}
