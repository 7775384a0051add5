//! Fixed stop-word set used to strip noise tokens before novelty scoring.

/// Stop words removed from a sentence's token multiset before scoring.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "to", "of", "in", "on", "for", "with", "is", "are", "was",
    "were", "as", "at", "by", "be", "this", "that", "it", "from", "will", "can", "if",
];

/// Whether `word` is in the fixed stop-word set.
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_stop_words() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("if"));
        assert!(!is_stop_word("zircon"));
    }
}
