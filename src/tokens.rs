//! Cheap, deterministic token and word counting.
//!
//! Real tokenisers are expensive and model-specific; this crate uses a fixed
//! overestimate so budget arithmetic stays cheap and self-consistent across
//! the whole pipeline (input and output are measured with the same function).

/// Counts runs of non-whitespace bytes separated by ASCII whitespace
/// (space, tab, CR, LF).
#[must_use]
pub fn word_count(b: &[u8]) -> usize {
    let mut count = 0;
    let mut in_word = false;
    for &byte in b {
        let is_ws = matches!(byte, b' ' | b'\t' | b'\r' | b'\n');
        if is_ws {
            in_word = false;
        } else if !in_word {
            in_word = true;
            count += 1;
        }
    }
    count
}

/// `approx_tokens(b) = ceil(len(b) / 4) + word_count(b)`, or `0` for empty input.
///
/// This must be the same function applied to both input and output so that
/// reductions in byte length are also reductions in approximate token count.
#[must_use]
pub fn approx_tokens(b: &[u8]) -> usize {
    if b.is_empty() {
        return 0;
    }
    let byte_estimate = (b.len() + 3) / 4;
    byte_estimate + word_count(b)
}
