//! # squeezer
//!
//! Deterministic, budget-aware prose compression for LLM context windows.
//!
//! ## The Problem
//!
//! Long documents don't fit a model's context window, and naive truncation
//! throws away whatever happens to be at the end — including headings,
//! URLs, and other load-bearing structure. This crate prunes duplicate and
//! low-novelty sentences first, escalating aggressiveness only as far as
//! needed to fit a token budget, and always keeps anchors (headings, URLs,
//! numeric data, code fences) regardless of how aggressive the pass gets.
//!
//! Everything here is deterministic: the same input and options always
//! produce the same output, in the same process or a different one. There
//! is no embedding model, no randomness, no process-seeded hashing.
//!
//! ## Quick Start
//!
//! ```rust
//! use squeezer::{squeeze, Options};
//!
//! let input = b"# Notes\nThe quick brown fox jumps over the lazy dog.\n\
//!               The quick brown fox jumps over the lazy dog.\n\
//!               Visit https://example.com for more.\n";
//!
//! let options = Options {
//!     aggressiveness: 5,
//!     max_tokens: 0,
//!     profile: String::new(),
//! };
//!
//! let result = squeeze(input, &options).unwrap();
//! assert!(result.bytes_out <= result.bytes_in);
//! ```
//!
//! ## Pipeline
//!
//! 1. [`chunk::split_chunks`] groups sentences into heading-closed chunks.
//! 2. [`compress::compress_chunk`] prunes low-novelty and duplicate
//!    sentences per chunk at a given aggressiveness.
//! 3. The deduplication registry ([`registry::BoundedRecencyCache`]) tracks
//!    sentence signatures ([`signature::sentence_signature`]) across chunks
//!    within one pass.
//! 4. [`driver::squeeze`] escalates aggressiveness across up to ten attempts
//!    until `max_tokens` is met, then falls back to
//!    [`budget::truncate_to_budget`] and repairs heading continuity via
//!    [`heading::ensure_heading_continuity`].
//!
//! ## Ingest
//!
//! The [`ingest`] module decodes plain text, HTML, DOCX, and PDF sources
//! into normalised UTF-8 text before it reaches the core pipeline. DOCX and
//! PDF decoding are stubs in this build (see their module docs).
//!
//! ## Quality (supplemental)
//!
//! [`quality::analyze`] compares a squeeze result against its input for
//! keyword recall and section coverage. It is never invoked by the driver
//! and never affects [`Result`] or [`Error`].

mod anchor;
mod budget;
mod chunk;
mod compress;
mod driver;
mod error;
mod heading;
mod lexer;
mod memory;
mod metrics;
mod options;
mod quality;
mod registry;
mod result;
mod segment;
mod signature;
mod source;
mod stopwords;
mod tokens;

pub mod ingest;

pub use driver::{squeeze, squeeze_with_config};
pub use error::{Error, Result};
pub use metrics::StageMetrics;
pub use options::{Options, RunConfig};
pub use quality::{analyze, QualityReport};
pub use result::{ResultJson, SqueezeResult, ENGINE_VERSION};
pub use source::SourceType;
pub use tokens::approx_tokens;
