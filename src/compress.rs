//! Per-chunk aggressiveness-parameterised pruning: the algorithmic heart of
//! the pipeline.
//!
//! The real production system delegates this scoring to a native library;
//! this is a from-scratch, pure-Rust reimplementation of the policy it
//! describes, built around a chunk-local TF-IDF novelty score and an
//! explicit duplicate/first-occurrence rule.

use std::collections::{HashMap, HashSet};

use crate::anchor::{is_anchor, is_heading};
use crate::lexer::{normalize_whitespace_lower, tokenize_alphanumeric};
use crate::segment::{segment_sentences, Span, SpanKind};
use crate::stopwords::is_stop_word;

/// `θ_novelty(a)`: 0.0 at `a<=1`, rising linearly to 0.5 at `a=9`.
#[must_use]
pub fn theta_novelty(a: u8) -> f64 {
    if a <= 1 {
        return 0.0;
    }
    let a = f64::from(a);
    ((a - 1.0) / 8.0 * 0.50).min(0.50)
}

/// `threshold_dup(a)`: 9 (always keep the first occurrence) through `a=6`,
/// then 0 at `a>=7` (drop all but anchors), chosen so `a <= threshold_dup(a)`
/// stays true through `a=6` and flips to false at `a>=7`, non-increasing in
/// `a` (required for the compressor's monotonicity contract).
#[must_use]
pub fn threshold_dup(a: u8) -> f64 {
    if a <= 6 {
        9.0
    } else {
        0.0
    }
}

fn tf_idf_novelty(span: &Span, input: &[u8], doc_freq: &HashMap<String, u32>, doc_count: usize) -> f64 {
    let tokens: Vec<String> = tokenize_alphanumeric(span.bytes(input))
        .into_iter()
        .filter(|t| !is_stop_word(t))
        .collect();
    if tokens.is_empty() {
        return 0.0;
    }
    let mut tf: HashMap<&str, u32> = HashMap::new();
    for t in &tokens {
        *tf.entry(t.as_str()).or_insert(0) += 1;
    }
    let mut score = 0.0;
    for (token, count) in &tf {
        let df = doc_freq.get(*token).copied().unwrap_or(1);
        let idf = ((1.0 + doc_count as f64 / (1.0 + f64::from(df))) as f64).ln();
        score += f64::from(*count) * idf;
    }
    score / tokens.len() as f64
}

/// Prunes `chunk` at `aggressiveness`, returning the kept sentences
/// concatenated in source order. `aggressiveness == 0` returns `chunk`
/// verbatim (the identity floor).
#[must_use]
pub fn compress_chunk(chunk: &[u8], aggressiveness: u8) -> Vec<u8> {
    if aggressiveness == 0 {
        return chunk.to_vec();
    }

    let spans = segment_sentences(chunk);
    let sentence_spans: Vec<&Span> = spans.iter().filter(|s| s.kind == SpanKind::Sentence).collect();
    let doc_count = sentence_spans.len();

    let mut doc_freq: HashMap<String, u32> = HashMap::new();
    for span in &sentence_spans {
        let distinct: HashSet<String> = tokenize_alphanumeric(span.bytes(chunk))
            .into_iter()
            .filter(|t| !is_stop_word(t))
            .collect();
        for t in distinct {
            *doc_freq.entry(t).or_insert(0) += 1;
        }
    }

    let mut text_counts: HashMap<String, u32> = HashMap::new();
    for span in &sentence_spans {
        let norm = normalize_whitespace_lower(span.bytes(chunk));
        *text_counts.entry(norm).or_insert(0) += 1;
    }

    let theta = theta_novelty(aggressiveness);
    let dup_threshold = threshold_dup(aggressiveness);
    let mut seen_text: HashSet<String> = HashSet::new();

    let mut out = Vec::with_capacity(chunk.len());
    for span in &spans {
        if span.kind == SpanKind::ParagraphBreak {
            out.extend_from_slice(span.bytes(chunk));
            continue;
        }

        let bytes = span.bytes(chunk);
        let keep = if is_anchor(bytes) || is_heading(bytes) {
            true
        } else {
            let norm = normalize_whitespace_lower(bytes);
            let count = text_counts.get(&norm).copied().unwrap_or(1);
            let is_unique = count <= 1;
            let is_first_occurrence = seen_text.insert(norm);
            if is_unique {
                tf_idf_novelty(span, chunk, &doc_freq, doc_count) >= theta
            } else {
                is_first_occurrence && f64::from(aggressiveness) <= dup_threshold
            }
        };

        if keep {
            out.extend_from_slice(bytes);
        }
    }

    out
}
