/// Take at most `max_chars` characters of `s`.
///
/// Counts `char`s rather than bytes so multi-byte text never splits inside
/// a code point.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

/// Final component of a `/`-separated path, or the whole string when it has none.
pub fn basename_or_self(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => path,
    }
}
