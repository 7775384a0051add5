//! The adaptive driver: the public entry point that wraps the chunked pass
//! and escalates aggressiveness until the budget is met, or falls through to
//! the truncator.

use crate::anchor::{is_anchor, is_heading};
use crate::budget::truncate_to_budget;
use crate::chunk::split_chunks;
use crate::error::Result;
use crate::heading::ensure_heading_continuity;
use crate::memory::MemoryTracker;
use crate::metrics::{StageMetrics, StageTimer};
use crate::options::{normalize_aggressiveness, Options, RunConfig};
use crate::registry::BoundedRecencyCache;
use crate::result::SqueezeResult;
use crate::segment::{segment_sentences, SpanKind};
use crate::signature::sentence_signature;
use crate::source::SourceType;
use crate::tokens::approx_tokens;
use crate::{compress::compress_chunk, error::Error};

const MAX_ATTEMPTS: u8 = 10;
const REGISTRY_CAPACITY: usize = 100_000;

struct PassOutcome {
    output: Vec<u8>,
    stage_metrics: StageMetrics,
    warnings: Vec<String>,
    effective_aggressiveness: u8,
}

fn run_chunked_pass(input: &[u8], requested_a: u8, run_config: &RunConfig) -> PassOutcome {
    let chunk_timer = StageTimer::start("chunk_split");
    let chunks = split_chunks(input);
    let chunk_split_ms = chunk_timer.stop();

    let mut registry: BoundedRecencyCache<u64> = BoundedRecencyCache::new(REGISTRY_CAPACITY);
    let mut tracker = MemoryTracker::new(run_config.max_memory_mb);

    let mut effective_a = requested_a;
    let mut memory_warning_emitted = false;
    let mut warnings = Vec::new();

    let mut output = Vec::with_capacity(input.len());
    let mut compress_ms = 0.0;
    let mut registry_ms = 0.0;
    let mut sentences_total: u64 = 0;

    for chunk in &chunks {
        let over_limit = tracker.add(chunk.bytes.len() as i64);
        if over_limit && effective_a > 0 {
            effective_a -= 1;
            if !memory_warning_emitted {
                warnings.push("memory soft limit exceeded; reducing aggressiveness".to_owned());
                memory_warning_emitted = true;
            }
        }

        let compress_timer = StageTimer::start("compress");
        let compressed = compress_chunk(&chunk.bytes, effective_a);
        compress_ms += compress_timer.stop();

        let registry_timer = StageTimer::start("registry");
        let spans = segment_sentences(&compressed);
        for span in &spans {
            let bytes = span.bytes(&compressed);
            if span.kind == SpanKind::ParagraphBreak {
                output.extend_from_slice(bytes);
                continue;
            }
            sentences_total += 1;

            let h = sentence_signature(bytes);
            let present = registry.has(h);
            let keep = if is_anchor(bytes) || is_heading(bytes) {
                if !present {
                    registry.add(h);
                }
                true
            } else if present {
                false
            } else {
                registry.add(h);
                true
            };
            if keep {
                output.extend_from_slice(bytes);
            }
        }
        registry_ms += registry_timer.stop();

        tracker.release(chunk.bytes.len() as i64);
    }

    let stage_metrics = StageMetrics {
        segmentation_ms: 0.0,
        chunk_split_ms,
        compress_ms,
        registry_ms,
        budget_truncate_ms: 0.0,
        heading_repair_ms: 0.0,
        sentences_total,
        tokens_parsed: 0,
        peak_memory_estimate_b: tracker.peak(),
        attempts: 1,
    };

    PassOutcome {
        output,
        stage_metrics,
        warnings,
        effective_aggressiveness: effective_a,
    }
}

/// Compresses `input` under `options` with default resource limits.
pub fn squeeze(input: &[u8], options: &Options) -> Result<SqueezeResult> {
    squeeze_with_config(input, options, &RunConfig::default())
}

/// Compresses `input` under `options` and `run_config`. See `SPEC_FULL.md`
/// §4.9 for the adaptive-driver pseudocode this mirrors.
pub fn squeeze_with_config(
    input: &[u8],
    options: &Options,
    run_config: &RunConfig,
) -> Result<SqueezeResult> {
    let mut a = normalize_aggressiveness(options)?;

    let mut best = input.to_vec();
    let mut metrics = StageMetrics::default();
    let mut warnings = Vec::new();
    let mut effective_a = a;

    for _attempt in 0..MAX_ATTEMPTS {
        let outcome = run_chunked_pass(input, a, run_config);
        metrics.merge(&outcome.stage_metrics);
        warnings.extend(outcome.warnings);
        best = outcome.output;
        effective_a = outcome.effective_aggressiveness;

        if options.max_tokens == 0 || approx_tokens(&best) <= options.max_tokens || a == 9 {
            break;
        }
        a += 1;
    }

    let mut truncated = false;
    if options.max_tokens > 0 && approx_tokens(&best) > options.max_tokens {
        let truncate_timer = StageTimer::start("budget_truncate");
        best = truncate_to_budget(&best, options.max_tokens)?;
        metrics.budget_truncate_ms += truncate_timer.stop();
        truncated = true;
    }

    if !truncated {
        let repair_timer = StageTimer::start("heading_repair");
        best = ensure_heading_continuity(input, best);
        metrics.heading_repair_ms += repair_timer.stop();
    }

    metrics.tokens_parsed = approx_tokens(input) as u64;

    if options.max_tokens > 0 && approx_tokens(&best) > options.max_tokens {
        return Err(Error::BudgetUnsatisfiable);
    }

    Ok(SqueezeResult::new(
        input,
        best,
        effective_a,
        options.profile.clone(),
        options.max_tokens,
        truncated,
        SourceType::Text,
        warnings,
        metrics,
    ))
}
