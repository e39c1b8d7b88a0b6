//! Bounded edit-distance matching.
//!
//! Classic Levenshtein distance restricted to a small threshold, with early
//! abandonment so that obviously distant strings cost almost nothing. This is
//! the primitive behind typo tolerance in post search.

use std::cmp::min;

/// Default edit-distance threshold used by post search.
pub const DEFAULT_FUZZY_THRESHOLD: usize = 2;

/// Calculate Levenshtein distance, abandoning early once it is certain to
/// exceed `max`.
///
/// Returns `None` when the distance definitely exceeds `max`, which is the
/// common case while scanning a corpus and is much cheaper than the full
/// computation. Case-sensitive; callers normalize beforehand.
///
/// Two abandonment points:
/// - before the DP, when the length difference alone exceeds `max`
/// - after each row, when the row minimum exceeds `max` — later rows can
///   never go below the minimum of the current one
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
/// * `max` - Inclusive distance bound
///
/// # Example
/// ```
/// use foundly_search::levenshtein_within;
///
/// assert_eq!(levenshtein_within("kitten", "sitting", 5), Some(3));
/// assert_eq!(levenshtein_within("kitten", "sitting", 2), None);
/// ```
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.len().abs_diff(b_chars.len()) > max {
        return None;
    }

    // The shorter operand determines row width
    let (long, short) = if a_chars.len() >= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    if short.is_empty() {
        // Length pre-check already bounded long.len() <= max
        return Some(long.len());
    }

    let width = short.len();
    let mut prev: Vec<usize> = (0..=width).collect();
    let mut curr = vec![0usize; width + 1];

    for (i, &lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];

        for (j, &sc) in short.iter().enumerate() {
            let cost = if lc == sc { 0 } else { 1 };
            curr[j + 1] = min(min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
            row_min = min(row_min, curr[j + 1]);
        }

        if row_min > max {
            return None;
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[width];
    (distance <= max).then_some(distance)
}

/// Bounded edit distance with an integer surface.
///
/// Returns the true distance when it is within `threshold`, and the sentinel
/// `threshold + 1` ("definitely exceeds") when abandoned.
///
/// # Example
/// ```
/// use foundly_search::edit_distance;
///
/// assert_eq!(edit_distance("flaw", "lawn", 2), 2);
/// assert_eq!(edit_distance("kitten", "sitting", 2), 3); // sentinel
/// ```
#[inline]
pub fn edit_distance(a: &str, b: &str, threshold: usize) -> usize {
    levenshtein_within(a, b, threshold).unwrap_or(threshold + 1)
}

/// Check whether two strings are within `threshold` edits of each other.
///
/// Empty operands never match: a blank field or keyword says nothing about
/// similarity. Case-sensitive; callers normalize beforehand.
///
/// # Example
/// ```
/// use foundly_search::is_fuzzy_match;
///
/// assert!(is_fuzzy_match("computor", "computer", 2));
/// assert!(!is_fuzzy_match("keys", "computer", 2));
/// ```
#[inline]
pub fn is_fuzzy_match(a: &str, b: &str, threshold: usize) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    levenshtein_within(a, b, threshold).is_some()
}
