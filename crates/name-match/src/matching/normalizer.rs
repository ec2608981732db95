/// Lowercases, drops everything outside `[a-z0-9_]` and whitespace, then
/// collapses whitespace runs to single spaces and trims.
///
/// Punctuation is stripped before whitespace is collapsed, so `"A . B"`
/// becomes `"a b"` rather than leaving a double space behind.
pub fn normalize(name: &str) -> String {
    let lowered = name.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .filter(|ch| is_word_char(*ch) || ch.is_whitespace())
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits an already normalized name into its word tokens.
pub fn tokens(normalized: &str) -> Vec<&str> {
    normalized
        .split(' ')
        .filter(|token| !token.is_empty())
        .collect()
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
