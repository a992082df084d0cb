//! Shared utility functions.

/// Truncate a string to at most `max_chars` characters.
///
/// Counts Unicode scalar values rather than bytes, so the result never
/// splits a character. If the string is shorter, it is returned unchanged.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
