//! Sentence-granular truncation that preserves anchors, invoked only when
//! the adaptive driver could not meet `max_tokens` by pruning alone.

use crate::anchor::is_anchor;
use crate::error::{Error, Result};
use crate::segment::segment_sentences;
use crate::tokens::approx_tokens;

/// Greedily appends sentences of `output` in source order while the running
/// approximate token count stays within `max_tokens`. On the first sentence
/// that would overflow: if it is an anchor, trailing non-anchor kept
/// sentences are dropped until it fits (or the anchor is given up on if none
/// remain); otherwise truncation stops there, discarding the rest.
///
/// Fails with [`Error::BudgetTooSmall`] if no sentence at all could be kept.
pub fn truncate_to_budget(output: &[u8], max_tokens: usize) -> Result<Vec<u8>> {
    let spans = segment_sentences(output);

    let mut kept_ranges: Vec<(usize, usize)> = Vec::new();
    let mut kept_bytes: Vec<u8> = Vec::new();

    for span in &spans {
        let bytes = span.bytes(output);
        let before_len = kept_bytes.len();
        kept_bytes.extend_from_slice(bytes);

        if approx_tokens(&kept_bytes) <= max_tokens {
            kept_ranges.push((span.start, span.end));
            continue;
        }

        kept_bytes.truncate(before_len);

        if is_anchor(bytes) {
            loop {
                let Some(pos) = kept_ranges
                    .iter()
                    .rposition(|&(s, e)| !is_anchor(&output[s..e]))
                else {
                    break;
                };
                kept_ranges.remove(pos);
                kept_bytes = rebuild(&kept_ranges, output);

                let mut candidate = kept_bytes.clone();
                candidate.extend_from_slice(bytes);
                if approx_tokens(&candidate) <= max_tokens {
                    kept_ranges.push((span.start, span.end));
                    kept_bytes = candidate;
                    break;
                }
            }
        } else {
            break;
        }
    }

    if kept_ranges.is_empty() {
        return Err(Error::BudgetTooSmall);
    }

    Ok(kept_bytes)
}

fn rebuild(ranges: &[(usize, usize)], source: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    for &(s, e) in ranges {
        out.extend_from_slice(&source[s..e]);
    }
    out
}
