//! Wire protocol marker vocabulary.
//!
//! Marker header names are formed `<prefix><index>`: the prefixes come
//! from the relay's discovery document, the indices and pattern values
//! from the static tables below. The tables are the single source of
//! truth for marker counts and literal pattern values, so the indices
//! cannot drift between encoder and tests.

/// Value of the status-request marker header.
pub const FORWARD_STATUS_VALUE: &str = "1";

/// Patterns selecting which of the caller's original request headers the
/// relay forwards to the origin as-is. The relay matches them against
/// lowercase header names.
pub const REQUEST_FORWARD_PATTERNS: [&str; 3] = [
    "^accept.*$",
    "^content-.*$",
    "^user-agent$",
];

/// Patterns selecting which origin response headers the relay passes back
/// to the caller unprefixed.
pub const RESPONSE_FORWARD_PATTERNS: [&str; 8] = [
    "^accept-.*$",
    "^age$",
    "^content-.*$",
    "^cache-control$",
    "^date$",
    "^expires$",
    "^last-modified$",
    "^vary$",
];

/// Enumerate the `(header name, pattern)` markers for one table.
pub fn indexed<'a>(
    prefix: &'a str,
    patterns: &'static [&'static str],
) -> impl Iterator<Item = (String, &'static str)> + 'a {
    patterns
        .iter()
        .enumerate()
        .map(move |(index, pattern)| (format!("{prefix}{index}"), *pattern))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_tables() {
        assert_eq!(REQUEST_FORWARD_PATTERNS.len(), 3);
        assert_eq!(RESPONSE_FORWARD_PATTERNS.len(), 8);

        // Every pattern is anchored on both ends
        for pattern in REQUEST_FORWARD_PATTERNS
            .iter()
            .chain(RESPONSE_FORWARD_PATTERNS.iter())
        {
            assert!(pattern.starts_with('^'));
            assert!(pattern.ends_with('$'));
        }
    }

    #[test]
    fn test_indexed_names() {
        let markers: Vec<_> = indexed("x-fwd-", &REQUEST_FORWARD_PATTERNS).collect();
        assert_eq!(markers[0], ("x-fwd-0".to_string(), "^accept.*$"));
        assert_eq!(markers[1], ("x-fwd-1".to_string(), "^content-.*$"));
        assert_eq!(markers[2], ("x-fwd-2".to_string(), "^user-agent$"));
    }
}
