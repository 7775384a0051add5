//! PDF text extraction.
//!
//! Grounded on `examples/original_source/internal/ingest/pdf.go`: real PDF
//! parsing is out of scope, but the original's own extraction is itself
//! just a `\(([^()]*)\)\s*Tj` regex over the raw bytes (PDF content streams
//! emit visible text as `(...) Tj` show-text operators). Uses `regex`'s
//! bytes API since PDF bytes are not guaranteed to be valid UTF-8.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

use super::Document;
use crate::source::SourceType;

static SHOW_TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^()]*)\)\s*Tj").unwrap());

fn trim_bytes(b: &[u8]) -> Vec<u8> {
    let start = b.iter().position(|c| !c.is_ascii_whitespace()).unwrap_or(b.len());
    let end = b.iter().rposition(|c| !c.is_ascii_whitespace()).map_or(start, |i| i + 1);
    b[start..end].to_vec()
}

pub(super) fn decode(bytes: &[u8]) -> Document {
    let mut warnings = Vec::new();
    if !bytes.starts_with(b"%PDF-") {
        warnings.push("pdf header not recognised; extraction may be unreliable".to_owned());
    }

    let mut out = Vec::new();
    for caps in SHOW_TEXT.captures_iter(bytes) {
        if let Some(m) = caps.get(1) {
            out.extend_from_slice(m.as_bytes());
            out.push(b'\n');
        }
    }
    let text = trim_bytes(&out);

    if text.is_empty() {
        warnings.push("pdf extraction produced very little text".to_owned());
    } else if !bytes.is_empty() && (text.len() as f64 / bytes.len() as f64) < 0.01 {
        warnings.push("pdf text ratio is very low".to_owned());
    }

    Document {
        text,
        source_type: SourceType::Pdf,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_show_text_operators() {
        let doc = decode(b"%PDF-1.4\n1 0 obj\nBT (Hello World) Tj (Second line) Tj ET\nendobj");
        let text = String::from_utf8(doc.text).unwrap();
        assert_eq!(text, "Hello World\nSecond line");
        assert!(doc.warnings.is_empty());
    }

    #[test]
    fn missing_header_warns() {
        let doc = decode(b"not a pdf at all");
        assert!(doc.warnings.iter().any(|w| w.contains("header")));
    }

    #[test]
    fn no_show_text_yields_empty_with_warning() {
        let doc = decode(b"%PDF-1.4 fake bytes");
        assert!(doc.text.is_empty());
        assert_eq!(doc.source_type, SourceType::Pdf);
        assert_eq!(doc.warnings.len(), 1);
    }
}
