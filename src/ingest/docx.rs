//! DOCX decoding stub.
//!
//! A real decoder would unzip the package and extract `word/document.xml`.
//! No XML/zip crate appears in the corpus this crate was grown from, so
//! rather than hand-roll a fragile zip reader this emits empty text plus a
//! warning, leaving the door open for a real decoder later without dragging
//! in an ungrounded dependency now.

use super::Document;
use crate::source::SourceType;

pub(super) fn decode(_bytes: &[u8]) -> Document {
    Document {
        text: Vec::new(),
        source_type: SourceType::Docx,
        warnings: vec!["docx decoding is not supported in this build".to_owned()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_empty_text_with_warning() {
        let doc = decode(b"PK\x03\x04fake-docx-bytes");
        assert!(doc.text.is_empty());
        assert_eq!(doc.source_type, SourceType::Docx);
        assert_eq!(doc.warnings.len(), 1);
    }
}
