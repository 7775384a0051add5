//! Re-inserts the first non-heading sentence following any retained heading,
//! so no heading is ever left orphaned in the output.

use crate::anchor::is_heading;
use crate::segment::{segment_sentences, SpanKind};

fn is_blank(b: &[u8]) -> bool {
    b.iter().all(u8::is_ascii_whitespace)
}

fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Runs only when the caller has not truncated. For each heading sentence
/// of `input` that is present in `output`, finds the first following
/// non-heading, non-empty sentence `N` in `input`; if `N` is missing from
/// `output`, appends `"\n" + N` to it.
#[must_use]
pub fn ensure_heading_continuity(input: &[u8], output: Vec<u8>) -> Vec<u8> {
    let input_spans = segment_sentences(input);
    let mut result = output;

    for (i, span) in input_spans.iter().enumerate() {
        if span.kind != SpanKind::Sentence {
            continue;
        }
        let heading_bytes = span.bytes(input);
        if !is_heading(heading_bytes) || !contains_subslice(&result, heading_bytes) {
            continue;
        }

        let next = input_spans[i + 1..].iter().find(|s| {
            s.kind == SpanKind::Sentence
                && !is_blank(s.bytes(input))
                && !is_heading(s.bytes(input))
        });

        if let Some(n) = next {
            let n_bytes = n.bytes(input);
            if !contains_subslice(&result, n_bytes) {
                result.push(b'\n');
                result.extend_from_slice(n_bytes);
            }
        }
    }

    result
}
