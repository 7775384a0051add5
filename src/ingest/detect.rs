//! Source-type sniffing from a file path, used when `--source` is left at
//! `auto`.

use std::path::Path;

use crate::source::SourceType;

/// Sniffs `path`'s extension to a [`SourceType`]. Unknown or missing
/// extensions fall back to [`SourceType::Text`] and report a warning so
/// callers can surface the guess.
#[must_use]
pub fn detect_source_type(path: &Path) -> (SourceType, Option<String>) {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("pdf") => (SourceType::Pdf, None),
        Some("docx") => (SourceType::Docx, None),
        Some("html" | "htm") => (SourceType::Html, None),
        Some("txt" | "md") => (SourceType::Text, None),
        _ => (
            SourceType::Text,
            Some(format!(
                "could not determine source type from {:?}; assuming text",
                path
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn recognises_known_extensions() {
        assert_eq!(detect_source_type(&PathBuf::from("a.pdf")).0, SourceType::Pdf);
        assert_eq!(detect_source_type(&PathBuf::from("a.docx")).0, SourceType::Docx);
        assert_eq!(detect_source_type(&PathBuf::from("a.html")).0, SourceType::Html);
        assert_eq!(detect_source_type(&PathBuf::from("a.txt")).0, SourceType::Text);
    }

    #[test]
    fn unknown_extension_falls_back_to_text_with_warning() {
        let (kind, warning) = detect_source_type(&PathBuf::from("a.xyz"));
        assert_eq!(kind, SourceType::Text);
        assert!(warning.is_some());
    }

    #[test]
    fn no_extension_falls_back_to_text_with_warning() {
        let (kind, warning) = detect_source_type(&PathBuf::from("README"));
        assert_eq!(kind, SourceType::Text);
        assert!(warning.is_some());
    }
}
