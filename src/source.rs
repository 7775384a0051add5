//! Closed tagged variant identifying what an ingest decoder produced its
//! `Document` from.

use serde::Serialize;

/// The four source kinds a decoder may report. Closed: no open inheritance
/// over source kinds is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// PDF text extraction.
    Pdf,
    /// DOCX zip+XML extraction.
    Docx,
    /// HTML tag stripping.
    Html,
    /// Plain-text normalisation.
    Text,
}

impl SourceType {
    /// The lowercase string used on the wire (`"pdf"`, `"docx"`, `"html"`, `"text"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SourceType::Pdf => "pdf",
            SourceType::Docx => "docx",
            SourceType::Html => "html",
            SourceType::Text => "text",
        }
    }

    /// Parses a `--source` flag value, where `"auto"` has no direct mapping
    /// (callers should sniff the extension instead via [`crate::ingest::detect`]).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pdf" => Some(SourceType::Pdf),
            "docx" => Some(SourceType::Docx),
            "html" => Some(SourceType::Html),
            "text" => Some(SourceType::Text),
            _ => None,
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
