//! Source-format decoders: the collaborator layer between raw files and the
//! core pipeline. Each decoder produces a [`Document`]; the core never reads
//! a file or knows about source formats directly.

mod detect;
mod docx;
mod html;
mod pdf;
mod text;

pub use detect::detect_source_type;

use crate::error::Result;
use crate::source::SourceType;

/// Default cap on input size read by [`read_limited`], overridable via the
/// `CSQ_MAX_BYTES` environment variable.
pub const DEFAULT_MAX_BYTES: u64 = 50 * 1024 * 1024;

/// `{text, source_type, warnings}`: the ingest contract from decoders to the
/// core, per `SPEC_FULL.md` §6. `text` is UTF-8 with `\r\n` normalised to
/// `\n`.
#[derive(Debug, Clone)]
pub struct Document {
    /// Normalised text ready for the core pipeline.
    pub text: Vec<u8>,
    /// What kind of source this was decoded from.
    pub source_type: SourceType,
    /// Non-fatal conditions observed while decoding.
    pub warnings: Vec<String>,
}

/// Decodes `bytes` assuming `source_type`, dispatching to the matching
/// decoder.
pub fn decode(bytes: &[u8], source_type: SourceType) -> Result<Document> {
    match source_type {
        SourceType::Text => Ok(text::decode(bytes)),
        SourceType::Html => Ok(html::decode(bytes)),
        SourceType::Docx => Ok(docx::decode(bytes)),
        SourceType::Pdf => Ok(pdf::decode(bytes)),
    }
}

/// Reads `CSQ_MAX_BYTES` (bytes), falling back to [`DEFAULT_MAX_BYTES`] if
/// unset or unparseable.
#[must_use]
pub fn max_bytes_from_env() -> u64 {
    std::env::var("CSQ_MAX_BYTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_BYTES)
}

/// Reads `path` up to the configured byte limit, returning
/// [`crate::error::Error::InputOversize`] if it is exceeded.
pub fn read_file_limited(path: &std::path::Path) -> Result<Vec<u8>> {
    let limit = max_bytes_from_env();
    let metadata = std::fs::metadata(path)?;
    if metadata.len() > limit {
        return Err(crate::error::Error::InputOversize {
            size: metadata.len(),
            limit,
        });
    }
    std::fs::read(path).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_text_dispatches() {
        let doc = decode(b"a\r\nb", SourceType::Text).unwrap();
        assert_eq!(doc.text, b"a\nb");
        assert_eq!(doc.source_type, SourceType::Text);
    }
}
