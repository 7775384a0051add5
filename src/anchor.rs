//! Anchor and heading predicates over sentence bytes.
//!
//! Anchors are sentences deemed high-signal regardless of the statistical
//! scoring in [`crate::compress`]: headings, URLs, code fences, dense numeric
//! identifiers, and all-caps-heavy lines.

/// First non-space byte is `#`.
#[must_use]
pub fn is_heading(s: &[u8]) -> bool {
    s.iter()
        .find(|&&b| b != b' ' && b != b'\t')
        .is_some_and(|&b| b == b'#')
}

/// Counts ASCII digit bytes in `s`.
#[must_use]
pub fn digit_count(s: &[u8]) -> usize {
    s.iter().filter(|b| b.is_ascii_digit()).count()
}

/// At least 4 letters, with an upper/letter ratio of at least 0.8.
#[must_use]
pub fn is_all_caps_heavy(s: &[u8]) -> bool {
    let mut letters = 0usize;
    let mut upper = 0usize;
    for &b in s {
        if b.is_ascii_alphabetic() {
            letters += 1;
            if b.is_ascii_uppercase() {
                upper += 1;
            }
        }
    }
    letters >= 4 && (upper as f64) / (letters as f64) >= 0.8
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Contains a code fence, an `http(s)://` URL, has 4+ digits, is a heading,
/// or has an all-caps-heavy shape.
#[must_use]
pub fn is_anchor(s: &[u8]) -> bool {
    contains(s, b"```")
        || contains(s, b"http://")
        || contains(s, b"https://")
        || digit_count(s) >= 4
        || is_heading(s)
        || is_all_caps_heavy(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_requires_leading_hash() {
        assert!(is_heading(b"# Title"));
        assert!(is_heading(b"  ## Nested"));
        assert!(!is_heading(b"Not a heading"));
        assert!(!is_heading(b""));
    }

    #[test]
    fn url_and_fence_are_anchors() {
        assert!(is_anchor(b"Visit https://example.com for details."));
        assert!(is_anchor(b"```rust\nfn main() {}\n```"));
        assert!(!is_anchor(b"Plain prose with no markers."));
    }

    #[test]
    fn four_or_more_digits_is_anchor() {
        assert!(is_anchor(b"Build 2024 release."));
        assert!(!is_anchor(b"Only 3 digits 01."));
    }

    #[test]
    fn all_caps_heavy_shape() {
        assert!(is_all_caps_heavy(b"WARNING DANGER"));
        assert!(!is_all_caps_heavy(b"Warning Danger"));
        assert!(!is_all_caps_heavy(b"ab"));
    }
}
