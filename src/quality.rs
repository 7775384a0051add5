//! Supplemental, non-core quality analysis of a squeeze result against its
//! input. Never invoked by the adaptive driver and never affects
//! [`crate::Result`] or its invariants; callers may run it after a squeeze
//! purely to sanity-check the outcome.

use std::collections::{HashMap, HashSet};

use crate::anchor::is_heading;
use crate::lexer::tokenize_alphanumeric;
use crate::segment::{segment_sentences, SpanKind};
use crate::stopwords::is_stop_word;

/// Share of input's top keywords retained in output, and share of input's
/// headings whose heading-continuity successor survived into output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityReport {
    /// Fraction (0.0..=1.0) of the input's top TF-IDF keywords present in
    /// the output.
    pub keyword_recall: f64,
    /// Fraction (0.0..=1.0) of input headings whose following sentence
    /// survived into output.
    pub section_coverage: f64,
}

const TOP_KEYWORDS: usize = 20;

fn top_keywords(input: &[u8]) -> Vec<String> {
    let spans: Vec<_> = segment_sentences(input)
        .into_iter()
        .filter(|s| s.kind == SpanKind::Sentence)
        .collect();
    let doc_count = spans.len().max(1);

    let mut doc_freq: HashMap<String, u32> = HashMap::new();
    let mut total_freq: HashMap<String, u32> = HashMap::new();
    for span in &spans {
        let tokens: Vec<String> = tokenize_alphanumeric(span.bytes(input))
            .into_iter()
            .filter(|t| !is_stop_word(t))
            .collect();
        let distinct: HashSet<&String> = tokens.iter().collect();
        for t in distinct {
            *doc_freq.entry(t.clone()).or_insert(0) += 1;
        }
        for t in &tokens {
            *total_freq.entry(t.clone()).or_insert(0) += 1;
        }
    }

    let mut scored: Vec<(String, f64)> = total_freq
        .into_iter()
        .map(|(token, tf)| {
            let df = doc_freq.get(&token).copied().unwrap_or(1);
            let idf = (1.0 + doc_count as f64 / (1.0 + f64::from(df))).ln();
            (token, f64::from(tf) * idf)
        })
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(TOP_KEYWORDS);
    scored.into_iter().map(|(token, _)| token).collect()
}

fn keyword_recall(input: &[u8], output: &[u8]) -> f64 {
    let keywords = top_keywords(input);
    if keywords.is_empty() {
        return 1.0;
    }
    let output_tokens: HashSet<String> = tokenize_alphanumeric(output).into_iter().collect();
    let present = keywords.iter().filter(|k| output_tokens.contains(*k)).count();
    present as f64 / keywords.len() as f64
}

fn is_blank(b: &[u8]) -> bool {
    b.iter().all(u8::is_ascii_whitespace)
}

fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.windows(needle.len()).any(|w| w == needle)
}

fn section_coverage(input: &[u8], output: &[u8]) -> f64 {
    let spans = segment_sentences(input);
    let mut total = 0usize;
    let mut covered = 0usize;

    for (i, span) in spans.iter().enumerate() {
        if span.kind != SpanKind::Sentence || !is_heading(span.bytes(input)) {
            continue;
        }
        let Some(next) = spans[i + 1..].iter().find(|s| {
            s.kind == SpanKind::Sentence && !is_blank(s.bytes(input)) && !is_heading(s.bytes(input))
        }) else {
            continue;
        };
        total += 1;
        if contains_subslice(output, next.bytes(input)) {
            covered += 1;
        }
    }

    if total == 0 {
        1.0
    } else {
        covered as f64 / total as f64
    }
}

/// Runs both quality checks and returns the combined report.
#[must_use]
pub fn analyze(input: &[u8], output: &[u8]) -> QualityReport {
    QualityReport {
        keyword_recall: keyword_recall(input, output),
        section_coverage: section_coverage(input, output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_output_has_full_recall_and_coverage() {
        let input = b"# Heading\nImportant distinctive content follows here.\n";
        let report = analyze(input, input);
        assert_eq!(report.keyword_recall, 1.0);
        assert_eq!(report.section_coverage, 1.0);
    }

    #[test]
    fn empty_output_has_zero_recall() {
        let input = b"Distinctive vocabulary words about zircon crystallography appear here.";
        let report = analyze(input, b"");
        assert!(report.keyword_recall < 1.0);
    }

    #[test]
    fn no_headings_gives_full_section_coverage() {
        let input = b"No headings in this document at all.";
        let report = analyze(input, b"");
        assert_eq!(report.section_coverage, 1.0);
    }
}
