//! Filename suffix key used to order puzzle URLs.

/// Returns the 4-character ordering key embedded at the tail of a puzzle
/// token: the characters at positions `[len-8, len-4)`, counted in chars.
///
/// Puzzle filenames end in a 4-character sequence token followed by a
/// 4-character extension (`-aaab.jpg` ends in key `aaab` + `.jpg`), so this
/// slice captures the sequence token regardless of the rest of the name.
///
/// Tokens shorter than 8 characters have no room for key + extension; for
/// those the whole token is the key, and they sort among the rest by that
/// value. That degenerate behavior is intentional and locked by tests.
pub fn suffix_key(token: &str) -> &str {
    let count = token.chars().count();
    if count < 8 {
        return token;
    }
    let start = token
        .char_indices()
        .nth(count - 8)
        .map(|(i, _)| i)
        .unwrap_or(0);
    let end = token
        .char_indices()
        .nth(count - 4)
        .map(|(i, _)| i)
        .unwrap_or(token.len());
    &token[start..end]
}
