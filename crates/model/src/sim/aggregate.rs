//! Shared result aggregation.
//!
//! Workers accumulate privately and meet here exactly once each, at the end
//! of their quota. The lock is therefore taken a handful of times per run,
//! not per request; the per-request path never sees it.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::stats::{RunOutput, Summary, WorkerResult};

/// Running totals behind the aggregator's mutex.
#[derive(Debug, Default)]
struct Totals {
    hits: u64,
    misses: u64,
    latencies: Vec<Duration>,
}

/// Mutex-protected collection point for worker results.
///
/// Merging is commutative: hit and miss counts add, and every derived
/// metric is insensitive to the order latencies arrive in, so the summary
/// is identical for every worker interleaving with the same totals.
#[derive(Debug, Default)]
pub struct ResultsAggregator {
    totals: Mutex<Totals>,
}

impl ResultsAggregator {
    /// Creates an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one worker's finished results under a short lock.
    ///
    /// Called once per worker per run.
    pub fn merge(&self, result: WorkerResult) {
        let mut totals = self.totals.lock().unwrap_or_else(PoisonError::into_inner);
        totals.hits += result.hits;
        totals.misses += result.misses;
        totals.latencies.extend(result.latencies);
    }

    /// Drains the accumulated totals into the final run output.
    ///
    /// # Arguments
    ///
    /// * `elapsed` - Wall-clock duration of the run, measured by the driver
    ///   from spawn to last join.
    pub fn finalize(&self, elapsed: Duration) -> RunOutput {
        let totals = std::mem::take(&mut *self.totals.lock().unwrap_or_else(PoisonError::into_inner));
        let summary = Summary::from_totals(totals.hits, totals.misses, &totals.latencies, elapsed);
        RunOutput {
            summary,
            latencies: totals.latencies,
        }
    }
}
