//! Plain-text normalisation: `\r\n` -> `\n`, otherwise passed through.

use super::Document;
use crate::source::SourceType;

pub(super) fn decode(bytes: &[u8]) -> Document {
    let mut text = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\r' && i + 1 < bytes.len() && bytes[i + 1] == b'\n' {
            text.push(b'\n');
            i += 2;
        } else {
            text.push(bytes[i]);
            i += 1;
        }
    }
    Document {
        text,
        source_type: SourceType::Text,
        warnings: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises_crlf() {
        let doc = decode(b"line one\r\nline two\r\n");
        assert_eq!(doc.text, b"line one\nline two\n");
    }

    #[test]
    fn passes_through_lf_only() {
        let doc = decode(b"already\nnormalised\n");
        assert_eq!(doc.text, b"already\nnormalised\n");
    }
}
