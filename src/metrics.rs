//! Per-stage counters and elapsed times, plus a small `tracing`-backed timer.

use std::time::Instant;

use serde::Serialize;

/// Elapsed time (milliseconds) and counters for one run of the chunked pass.
/// Accumulated across adaptive-driver attempts via [`StageMetrics::merge`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct StageMetrics {
    /// Time spent in the sentence segmenter.
    pub segmentation_ms: f64,
    /// Time spent grouping spans into chunks.
    pub chunk_split_ms: f64,
    /// Time spent in the per-chunk pruning compressor.
    pub compress_ms: f64,
    /// Time spent in cross-chunk dedup via the signature registry.
    pub registry_ms: f64,
    /// Time spent in the budget truncator (zero if not invoked).
    pub budget_truncate_ms: f64,
    /// Time spent in heading-continuity repair (zero if not invoked).
    pub heading_repair_ms: f64,
    /// Total sentences observed across all chunks.
    pub sentences_total: u64,
    /// Total approximate tokens parsed from the input.
    pub tokens_parsed: u64,
    /// Peak value ever reported by the memory tracker's ledger.
    pub peak_memory_estimate_b: i64,
    /// Number of adaptive-driver attempts taken.
    pub attempts: u32,
}

impl StageMetrics {
    /// Accumulates `other` into `self`: durations and counters sum, peak
    /// memory takes the max.
    pub fn merge(&mut self, other: &StageMetrics) {
        self.segmentation_ms += other.segmentation_ms;
        self.chunk_split_ms += other.chunk_split_ms;
        self.compress_ms += other.compress_ms;
        self.registry_ms += other.registry_ms;
        self.budget_truncate_ms += other.budget_truncate_ms;
        self.heading_repair_ms += other.heading_repair_ms;
        self.sentences_total += other.sentences_total;
        self.tokens_parsed += other.tokens_parsed;
        self.peak_memory_estimate_b = self.peak_memory_estimate_b.max(other.peak_memory_estimate_b);
        self.attempts += other.attempts;
    }
}

/// A stage timer that logs a `tracing` event on start and stop.
pub struct StageTimer {
    name: &'static str,
    start: Instant,
}

impl StageTimer {
    /// Starts timing a stage named `name`.
    #[must_use]
    pub fn start(name: &'static str) -> Self {
        tracing::trace!(stage = name, "stage start");
        Self {
            name,
            start: Instant::now(),
        }
    }

    /// Stops the timer, returning the elapsed time in milliseconds.
    pub fn stop(self) -> f64 {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        tracing::trace!(stage = self.name, elapsed_ms, "stage done");
        elapsed_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_sums_durations_and_maxes_peak_memory() {
        let mut a = StageMetrics {
            segmentation_ms: 1.0,
            peak_memory_estimate_b: 100,
            attempts: 1,
            ..Default::default()
        };
        let b = StageMetrics {
            segmentation_ms: 2.0,
            peak_memory_estimate_b: 50,
            attempts: 1,
            ..Default::default()
        };
        a.merge(&b);
        assert_eq!(a.segmentation_ms, 3.0);
        assert_eq!(a.peak_memory_estimate_b, 100);
        assert_eq!(a.attempts, 2);
    }
}
