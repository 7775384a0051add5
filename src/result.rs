//! The core's output record, and its JSON rendering for external
//! serialisers.

use serde::Serialize;

use crate::metrics::StageMetrics;
use crate::source::SourceType;
use crate::tokens::approx_tokens;

/// Engine version string surfaced in `Result`/JSON output. Falls back to
/// `"dev"` if the crate version is somehow unavailable at compile time.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The outcome of one `squeeze` invocation.
#[derive(Debug, Clone)]
pub struct SqueezeResult {
    /// The compressed output bytes.
    pub text: Vec<u8>,
    /// Input size in bytes.
    pub bytes_in: u64,
    /// Output size in bytes.
    pub bytes_out: u64,
    /// `approx_tokens(input)`.
    pub tokens_in_approx: u64,
    /// `approx_tokens(output)`.
    pub tokens_out_approx: u64,
    /// `(bytes_in - bytes_out) / bytes_in`, as a percentage; `0.0` if
    /// `bytes_in == 0`.
    pub reduction_pct: f64,
    /// The aggressiveness actually used (after normalisation and any
    /// memory-pressure backoff), in the final attempt.
    pub aggressiveness: u8,
    /// The `profile` string the caller supplied.
    pub profile: String,
    /// `max_tokens > 0`.
    pub budget_applied: bool,
    /// Whether the budget truncator had to run.
    pub truncated: bool,
    /// What kind of document this was decoded from.
    pub source_type: SourceType,
    /// Non-fatal conditions observed during the run, in emission order.
    pub warnings: Vec<String>,
    /// Per-stage elapsed time and counters.
    pub stage_metrics: StageMetrics,
}

impl SqueezeResult {
    /// Builds a result from an input/output byte pair and the bookkeeping
    /// the driver accumulated, computing the derived fields
    /// (`bytes_in/out`, `tokens_*_approx`, `reduction_pct`).
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        input: &[u8],
        output: Vec<u8>,
        aggressiveness: u8,
        profile: String,
        max_tokens: usize,
        truncated: bool,
        source_type: SourceType,
        warnings: Vec<String>,
        stage_metrics: StageMetrics,
    ) -> Self {
        let bytes_in = input.len() as u64;
        let bytes_out = output.len() as u64;
        let tokens_in_approx = approx_tokens(input) as u64;
        let tokens_out_approx = approx_tokens(&output) as u64;
        let reduction_pct = if bytes_in == 0 {
            0.0
        } else {
            (bytes_in as f64 - bytes_out as f64) / bytes_in as f64 * 100.0
        };
        Self {
            text: output,
            bytes_in,
            bytes_out,
            tokens_in_approx,
            tokens_out_approx,
            reduction_pct,
            aggressiveness,
            profile,
            budget_applied: max_tokens > 0,
            truncated,
            source_type,
            warnings,
            stage_metrics,
        }
    }
}

/// Schema-v1 JSON rendering of [`SqueezeResult`]: `text` when the output is
/// valid UTF-8, `text_b64` (base64) otherwise — exactly one is present.
#[derive(Debug, Serialize)]
pub struct ResultJson {
    schema_version: u32,
    engine_version: &'static str,
    bytes_in: u64,
    bytes_out: u64,
    tokens_in_approx: u64,
    tokens_out_approx: u64,
    reduction_pct: f64,
    aggressiveness: u8,
    profile: String,
    budget_applied: bool,
    truncated: bool,
    source_type: String,
    warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_b64: Option<String>,
}

impl From<&SqueezeResult> for ResultJson {
    fn from(r: &SqueezeResult) -> Self {
        let (text, text_b64) = match std::str::from_utf8(&r.text) {
            Ok(s) => (Some(s.to_owned()), None),
            Err(_) => (None, Some(base64_encode(&r.text))),
        };
        Self {
            schema_version: 1,
            engine_version: ENGINE_VERSION,
            bytes_in: r.bytes_in,
            bytes_out: r.bytes_out,
            tokens_in_approx: r.tokens_in_approx,
            tokens_out_approx: r.tokens_out_approx,
            reduction_pct: r.reduction_pct,
            aggressiveness: r.aggressiveness,
            profile: r.profile.clone(),
            budget_applied: r.budget_applied,
            truncated: r.truncated,
            source_type: r.source_type.as_str().to_owned(),
            warnings: r.warnings.clone(),
            text,
            text_b64,
        }
    }
}

fn base64_encode(bytes: &[u8]) -> String {
    use base64::Engine as _;
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_utf8_uses_text_field() {
        let result = SqueezeResult::new(
            b"hello",
            b"hello".to_vec(),
            0,
            String::new(),
            0,
            false,
            SourceType::Text,
            Vec::new(),
            StageMetrics::default(),
        );
        let json = ResultJson::from(&result);
        assert!(json.text.is_some());
        assert!(json.text_b64.is_none());
    }

    #[test]
    fn invalid_utf8_uses_text_b64_field() {
        let bytes = vec![0xFF, 0xFE, 0xFD, 0xFA];
        let result = SqueezeResult::new(
            &bytes,
            bytes.clone(),
            0,
            String::new(),
            0,
            false,
            SourceType::Text,
            Vec::new(),
            StageMetrics::default(),
        );
        let json = ResultJson::from(&result);
        assert!(json.text.is_none());
        assert!(json.text_b64.is_some());
    }

    #[test]
    fn reduction_pct_is_zero_for_empty_input() {
        let result = SqueezeResult::new(
            b"",
            Vec::new(),
            0,
            String::new(),
            0,
            false,
            SourceType::Text,
            Vec::new(),
            StageMetrics::default(),
        );
        assert_eq!(result.reduction_pct, 0.0);
    }
}
