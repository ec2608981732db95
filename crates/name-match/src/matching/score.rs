use serde::Serialize;

use super::character::max_char_similarity;
use super::normalizer::{normalize, tokens};
use super::overlap::word_similarity;

/// Duplicate cut line used when the caller does not supply one.
pub const DEFAULT_DUPLICATE_THRESHOLD: f64 = 0.7;

/// Score returned when one normalized name contains the other.
pub const CONTAINMENT_SCORE: f64 = 0.9;

const WORD_WEIGHT: f64 = 0.6;
const CHAR_WEIGHT: f64 = 0.4;

/// Which path through the scorer produced the final value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    Exact,
    Containment,
    Blended,
}

impl MatchMethod {
    pub fn label(&self) -> &'static str {
        match self {
            MatchMethod::Exact => "exact",
            MatchMethod::Containment => "containment",
            MatchMethod::Blended => "blended",
        }
    }
}

/// Full accounting of a single comparison.
///
/// `word_similarity` and `char_similarity` are only computed on the blended
/// path; the shortcuts report them as `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityBreakdown {
    pub left_normalized: String,
    pub right_normalized: String,
    pub method: MatchMethod,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_similarity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_similarity: Option<f64>,
}

/// Similarity in `[0, 1]` between two raw names.
pub fn similarity(left: &str, right: &str) -> f64 {
    similarity_breakdown(left, right).score
}

pub fn similarity_breakdown(left: &str, right: &str) -> SimilarityBreakdown {
    let left_normalized = normalize(left);
    let right_normalized = normalize(right);

    if left_normalized == right_normalized {
        return SimilarityBreakdown {
            left_normalized,
            right_normalized,
            method: MatchMethod::Exact,
            score: 1.0,
            word_similarity: None,
            char_similarity: None,
        };
    }

    // An empty name is a substring of everything; it must not shortcut.
    let both_present = !left_normalized.is_empty() && !right_normalized.is_empty();
    if both_present
        && (left_normalized.contains(&right_normalized)
            || right_normalized.contains(&left_normalized))
    {
        return SimilarityBreakdown {
            left_normalized,
            right_normalized,
            method: MatchMethod::Containment,
            score: CONTAINMENT_SCORE,
            word_similarity: None,
            char_similarity: None,
        };
    }

    let left_tokens = tokens(&left_normalized);
    let right_tokens = tokens(&right_normalized);
    let words = word_similarity(&left_tokens, &right_tokens);
    let chars = max_char_similarity(&left_tokens, &right_tokens);
    let score = (WORD_WEIGHT * words + CHAR_WEIGHT * chars).clamp(0.0, 1.0);

    SimilarityBreakdown {
        left_normalized,
        right_normalized,
        method: MatchMethod::Blended,
        score,
        word_similarity: Some(words),
        char_similarity: Some(chars),
    }
}

/// Duplicate verdict at [`DEFAULT_DUPLICATE_THRESHOLD`].
pub fn is_duplicate(left: &str, right: &str) -> bool {
    is_duplicate_with_threshold(left, right, DEFAULT_DUPLICATE_THRESHOLD)
}

pub fn is_duplicate_with_threshold(left: &str, right: &str, threshold: f64) -> bool {
    similarity(left, right) >= threshold
}
