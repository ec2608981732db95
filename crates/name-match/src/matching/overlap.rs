/// Fraction of tokens that find an equal or prefix-related partner on the
/// other side, divided by the longer token count.
///
/// Each token counts once, on the first qualifying partner in order; no
/// one-to-one pairing is attempted. Both directions are scanned and the
/// larger count is kept so the score does not depend on argument order.
pub fn word_similarity(left: &[&str], right: &[&str]) -> f64 {
    let longest = left.len().max(right.len());
    if longest == 0 {
        return 0.0;
    }

    let common = common_words(left, right).max(common_words(right, left));
    common as f64 / longest as f64
}

fn common_words(source: &[&str], target: &[&str]) -> usize {
    source
        .iter()
        .filter(|word| target.iter().any(|other| words_related(word, other)))
        .count()
}

fn words_related(a: &str, b: &str) -> bool {
    a == b || a.starts_with(b) || b.starts_with(a)
}
