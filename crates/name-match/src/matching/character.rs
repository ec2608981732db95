/// Tokens shorter than this are ignored by [`max_char_similarity`].
pub const MIN_CHAR_TOKEN_LEN: usize = 3;

/// Positional similarity between two tokens: mismatches at shared positions
/// plus the length difference, measured against the longer token.
///
/// Not an edit distance. A single inserted character shifts every later
/// position and is charged as a mismatch at each of them.
pub fn char_similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (longer, shorter) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if longer.is_empty() {
        return 1.0;
    }

    let mismatches = shorter
        .iter()
        .zip(longer.iter())
        .filter(|(s, l)| s != l)
        .count();
    let distance = mismatches + (longer.len() - shorter.len());

    1.0 - distance as f64 / longer.len() as f64
}

/// Best [`char_similarity`] across every token pair where both tokens have
/// at least [`MIN_CHAR_TOKEN_LEN`] characters, or 0.0 when no pair qualifies.
pub fn max_char_similarity(left: &[&str], right: &[&str]) -> f64 {
    let mut best = 0.0_f64;
    for a in left.iter().filter(|token| qualifies(token)) {
        for b in right.iter().filter(|token| qualifies(token)) {
            best = best.max(char_similarity(a, b));
        }
    }
    best
}

fn qualifies(token: &str) -> bool {
    token.chars().count() >= MIN_CHAR_TOKEN_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_tokens_score_one() {
        assert_eq!(char_similarity("howard", "howard"), 1.0);
    }

    #[test]
    fn length_difference_counts_toward_distance() {
        assert_eq!(char_similarity("dan", "daniel"), 0.5);
        assert_eq!(char_similarity("daniel", "dan"), 0.5);
    }

    #[test]
    fn shared_positions_are_compared_one_to_one() {
        assert!((char_similarity("ladue", "ladie") - 0.8).abs() < 1e-12);
        assert_eq!(char_similarity("woodall", "woodbell"), 1.0 - 3.0 / 8.0);
    }

    #[test]
    fn empty_tokens_are_identical() {
        assert_eq!(char_similarity("", ""), 1.0);
    }

    #[test]
    fn short_tokens_are_excluded_from_the_maximum() {
        assert_eq!(max_char_similarity(&["l"], &["l"]), 0.0);
        assert_eq!(max_char_similarity(&["jo", "ed"], &["jo", "ed"]), 0.0);
        assert_eq!(max_char_similarity(&["brandon", "l"], &["brandon", "ladue"]), 1.0);
    }

    #[test]
    fn maximum_is_taken_over_all_pairs() {
        let score = max_char_similarity(&["dan", "howard"], &["daniel", "howerd"]);
        assert!((score - 5.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn no_tokens_means_zero() {
        assert_eq!(max_char_similarity(&[], &["eben"]), 0.0);
    }
}
