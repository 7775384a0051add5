//! Shared lowercase-alphanumeric tokenisation used by both the compressor's
//! novelty scoring and the signature registry's fingerprinting.

/// Splits `s` into runs of ASCII alphanumeric bytes, lower-cased. Anything
/// else (punctuation, whitespace, non-ASCII bytes) is a separator.
#[must_use]
pub fn tokenize_alphanumeric(s: &[u8]) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for &b in s {
        if b.is_ascii_alphanumeric() {
            current.push(b.to_ascii_lowercase() as char);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Lowercases `s` and collapses runs of ASCII whitespace to a single space,
/// trimming the result. Used to compare sentences "modulo case/punctuation"
/// for repeat detection.
#[must_use]
pub fn normalize_whitespace_lower(s: &[u8]) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_was_space = true;
    for &b in s {
        if b.is_ascii_whitespace() {
            if !last_was_space {
                out.push(' ');
                last_was_space = true;
            }
        } else {
            out.push((b as char).to_ascii_lowercase());
            last_was_space = false;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_and_lowercases() {
        assert_eq!(
            tokenize_alphanumeric(b"Hello, World! 2024"),
            vec!["hello", "world", "2024"]
        );
    }

    #[test]
    fn normalize_collapses_whitespace_and_case() {
        assert_eq!(normalize_whitespace_lower(b"  Repeat.   Repeat. "), "repeat. repeat.");
    }
}
