mod character;
mod normalizer;
mod overlap;
pub mod router;
mod score;

use serde::{Deserialize, Serialize};

pub use character::{char_similarity, max_char_similarity, MIN_CHAR_TOKEN_LEN};
pub use normalizer::{normalize, tokens};
pub use overlap::word_similarity;
pub use router::name_router;
pub use score::{
    is_duplicate, is_duplicate_with_threshold, similarity, similarity_breakdown, MatchMethod,
    SimilarityBreakdown, CONTAINMENT_SCORE, DEFAULT_DUPLICATE_THRESHOLD,
};

#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("duplicate threshold must be a number between 0 and 1 (got {0})")]
    InvalidThreshold(f64),
}

/// Score at or above which two names are reported as the same person.
///
/// Lower values flag more pairs and admit more false positives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DuplicateThreshold(f64);

impl DuplicateThreshold {
    pub fn new(value: f64) -> Result<Self, MatchError> {
        if value.is_nan() || !(0.0..=1.0).contains(&value) {
            return Err(MatchError::InvalidThreshold(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for DuplicateThreshold {
    fn default() -> Self {
        Self(DEFAULT_DUPLICATE_THRESHOLD)
    }
}

impl TryFrom<f64> for DuplicateThreshold {
    type Error = MatchError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DuplicateThreshold> for f64 {
    fn from(value: DuplicateThreshold) -> Self {
        value.0
    }
}

/// Outcome of comparing two names under a matcher's threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameComparison {
    pub left: String,
    pub right: String,
    pub threshold: f64,
    pub duplicate: bool,
    #[serde(flatten)]
    pub breakdown: SimilarityBreakdown,
}

/// Scores name pairs against a fixed duplicate threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NameMatcher {
    threshold: DuplicateThreshold,
}

impl NameMatcher {
    pub fn new(threshold: DuplicateThreshold) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> DuplicateThreshold {
        self.threshold
    }

    pub fn similarity(&self, left: &str, right: &str) -> f64 {
        similarity(left, right)
    }

    pub fn is_duplicate(&self, left: &str, right: &str) -> bool {
        is_duplicate_with_threshold(left, right, self.threshold.value())
    }

    pub fn compare(&self, left: &str, right: &str) -> NameComparison {
        let breakdown = similarity_breakdown(left, right);
        NameComparison {
            left: left.to_string(),
            right: right.to_string(),
            threshold: self.threshold.value(),
            duplicate: breakdown.score >= self.threshold.value(),
            breakdown,
        }
    }
}
