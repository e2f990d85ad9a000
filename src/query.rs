//! Search query encoding
//!
//! Filters are candidates in a fixed priority order; only non-empty values
//! are emitted. Whether a `&` separator is written depends on what is
//! already present in the output, not on the candidate's position, so the
//! filter list can grow without touching this code.

/// Encode `(key, value)` candidates into a query string. Empty values are
/// omitted entirely; the result is `""` when nothing qualifies, never a
/// stray `&` or `?`.
pub fn encode(filters: &[(&str, &str)]) -> String {
    let mut encoded = String::new();
    for (key, value) in filters {
        if value.is_empty() {
            continue;
        }
        if !encoded.is_empty() {
            encoded.push('&');
        }
        encoded.push_str(key);
        encoded.push('=');
        encoded.push_str(&urlencoding::encode(value));
    }
    encoded
}
