//! Groups sentence spans into bounded chunks for the per-chunk compressor.

use crate::segment::{segment_sentences, SpanKind};

/// Chunks never hold more than this many sentences before a new heading or
/// end-of-input forces a close.
pub const DEFAULT_CHUNK_SENTENCES: usize = 500;

/// A contiguous run of the input, copied out so the compressor may mutate it
/// freely without touching the original buffer.
#[derive(Debug, Clone)]
pub struct Chunk {
    /// Owned bytes covered by this chunk.
    pub bytes: Vec<u8>,
    /// Start offset of the chunk in the original input.
    pub start: usize,
    /// End offset of the chunk in the original input.
    pub end: usize,
}

/// Splits `input` into chunks, closing a chunk when the current span is a
/// heading and the chunk already holds at least one sentence, or when the
/// chunk has reached [`DEFAULT_CHUNK_SENTENCES`]. The final chunk may be
/// short. Never splits a sentence.
#[must_use]
pub fn split_chunks(input: &[u8]) -> Vec<Chunk> {
    let spans = segment_sentences(input);
    if spans.is_empty() {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut run_start_idx = 0usize;
    let mut count = 0usize;

    for (i, span) in spans.iter().enumerate() {
        let is_heading = span.kind == SpanKind::Sentence && crate::anchor::is_heading(span.bytes(input));
        if i > run_start_idx && is_heading && count >= 1 {
            let start = spans[run_start_idx].start;
            let end = spans[i - 1].end;
            chunks.push(Chunk {
                bytes: input[start..end].to_vec(),
                start,
                end,
            });
            run_start_idx = i;
            count = 0;
        } else if count >= DEFAULT_CHUNK_SENTENCES {
            let start = spans[run_start_idx].start;
            let end = spans[i - 1].end;
            chunks.push(Chunk {
                bytes: input[start..end].to_vec(),
                start,
                end,
            });
            run_start_idx = i;
            count = 0;
        }
        count += 1;
    }

    let start = spans[run_start_idx].start;
    let end = spans[spans.len() - 1].end;
    chunks.push(Chunk {
        bytes: input[start..end].to_vec(),
        start,
        end,
    });

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(split_chunks(b"").is_empty());
    }

    #[test]
    fn single_short_input_is_one_chunk() {
        let input = b"Just one sentence.";
        let chunks = split_chunks(input);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].bytes, input);
    }

    #[test]
    fn heading_closes_prior_chunk() {
        let input = b"Intro sentence.\n# Heading\nBody sentence.";
        let chunks = split_chunks(input);
        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].bytes.starts_with(b"Intro sentence."));
        assert!(chunks[1].bytes.starts_with(b"# Heading"));
    }

    #[test]
    fn chunks_cover_input_contiguously() {
        let input = b"A. B. C.\n# H\nD. E.";
        let chunks = split_chunks(input);
        let mut cursor = 0;
        for c in &chunks {
            assert_eq!(c.start, cursor);
            cursor = c.end;
        }
        assert_eq!(cursor, input.len());
    }

    #[test]
    fn large_run_closes_at_default_chunk_sentences() {
        let mut input = String::new();
        for _ in 0..(DEFAULT_CHUNK_SENTENCES + 10) {
            input.push_str("Sentence. ");
        }
        let chunks = split_chunks(input.as_bytes());
        assert!(chunks.len() >= 2);
    }
}
