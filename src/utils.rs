//! Utility functions for string processing.

/// Tokens this short or shorter are dropped ("a", "is", "my", ...).
pub const MAX_DROPPED_TOKEN_LEN: usize = 2;

/// Split a query into lowercase search tokens.
///
/// # Algorithm
///
/// 1. Lowercase the whole string
/// 2. Replace every character that is neither a word character (`[a-z0-9_]`)
///    nor whitespace with a space
/// 3. Split on whitespace runs
/// 4. Drop tokens of length ≤ 2
///
/// Order is preserved and duplicates are kept. The matcher and the intent
/// classifier both go through here, so `Intent::keywords` always equals the
/// token list the matcher scored with.
///
/// ```
/// use folio::tokenize;
///
/// assert_eq!(tokenize("What's your Tech-Stack?"), vec!["what", "your", "tech", "stack"]);
/// ```
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .chars()
        .map(|c| if is_word_char(c) || c.is_whitespace() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .filter(|token| token.len() > MAX_DROPPED_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

/// ASCII word character: letters, digits, underscore.
///
/// Non-ASCII letters are treated as separators, so every surviving token is
/// ASCII and its byte length equals its character count.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Case-insensitive substring test. `needle` must already be lowercase.
#[inline]
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// First `max_chars` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
