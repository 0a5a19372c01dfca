//! String utilities for the domain layer.

/// Number of characters (not bytes) in `s`.
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Leading slice of `s` holding at most `max_chars` characters (UTF-8 safe).
///
/// Returns the slice and whether anything was cut off.
pub fn char_prefix(s: &str, max_chars: usize) -> (&str, bool) {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => (&s[..end], true),
        None => (s, false),
    }
}
