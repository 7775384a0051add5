//! Byte-oriented sentence segmentation.
//!
//! This is deliberately not Unicode sentence-boundary analysis (UAX #29): the
//! pipeline needs a cheap, fully deterministic scan that treats `.`, `?`, `!`
//! as terminators and `"\n\n"` as an explicit paragraph break, with
//! abbreviations producing accepted false splits.

/// What kind of span a [`Span`] covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// An ordinary sentence, terminated by `.`/`?`/`!` plus trailing
    /// whitespace, or by running to end-of-input.
    Sentence,
    /// The literal two-byte `"\n\n"` paragraph break.
    ParagraphBreak,
}

/// A half-open byte interval `[start, end)` over some input buffer, tagged
/// with what kind of content it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start offset, inclusive.
    pub start: usize,
    /// End offset, exclusive.
    pub end: usize,
    /// Whether this span is a sentence or a paragraph break.
    pub kind: SpanKind,
}

impl Span {
    /// The bytes covered by this span in `input`.
    #[must_use]
    pub fn bytes<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.start..self.end]
    }
}

fn is_ascii_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Splits `input` into an ordered, non-overlapping list of spans tiling it.
///
/// Algorithm: scan bytewise; a `"\n\n"` occurrence closes any open span and
/// emits a dedicated paragraph-break span; `.`, `?`, `!` extend over trailing
/// whitespace (stopping before a `"\n\n"` boundary) and close a sentence
/// span; end-of-input with an open span emits a final sentence span.
#[must_use]
pub fn segment_sentences(input: &[u8]) -> Vec<Span> {
    let len = input.len();
    let mut spans = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < len {
        if input[i] == b'\n' && i + 1 < len && input[i + 1] == b'\n' {
            if i > start {
                spans.push(Span {
                    start,
                    end: i,
                    kind: SpanKind::Sentence,
                });
            }
            spans.push(Span {
                start: i,
                end: i + 2,
                kind: SpanKind::ParagraphBreak,
            });
            i += 2;
            start = i;
            continue;
        }

        if matches!(input[i], b'.' | b'?' | b'!') {
            let mut end = i + 1;
            while end < len && is_ascii_ws(input[end]) {
                if input[end] == b'\n' && end + 1 < len && input[end + 1] == b'\n' {
                    break;
                }
                end += 1;
            }
            spans.push(Span {
                start,
                end,
                kind: SpanKind::Sentence,
            });
            start = end;
            i = end;
            continue;
        }

        i += 1;
    }

    if start < len {
        spans.push(Span {
            start,
            end: len,
            kind: SpanKind::Sentence,
        });
    }

    spans
}
