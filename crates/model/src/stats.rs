//! Benchmark statistics collection and reporting.
//!
//! This module defines the result types that flow out of a run. It provides:
//! 1. **Per-worker accumulation:** [`WorkerResult`] is owned by one worker
//!    and filled lock-free; classification is recorded where it happened,
//!    never re-derived later.
//! 2. **Run summary:** [`Summary`] holds the derived metrics with guarded
//!    divisions, serialized under the stable artifact field names.
//! 3. **Reporting:** a banner-formatted human summary printer.

use std::time::Duration;

use serde::Serialize;

use crate::common::AccessOutcome;

/// Per-worker result accumulator.
///
/// Each worker owns exactly one of these and touches nothing shared while
/// filling it; the whole struct is handed to the aggregator once, when the
/// worker's quota is done.
#[derive(Clone, Debug, Default)]
pub struct WorkerResult {
    /// Number of requests this worker classified as hits.
    pub hits: u64,
    /// Number of requests this worker classified as misses.
    pub misses: u64,
    /// Service latency of every request, in issue order.
    pub latencies: Vec<Duration>,
}

impl WorkerResult {
    /// Creates an empty accumulator with room for `quota` requests, so the
    /// hot loop never reallocates.
    pub fn with_capacity(quota: usize) -> Self {
        Self {
            hits: 0,
            misses: 0,
            latencies: Vec::with_capacity(quota),
        }
    }

    /// Records one request: the outcome decided at the cache and the
    /// latency looked up from it.
    #[inline(always)]
    pub fn record(&mut self, outcome: AccessOutcome, latency: Duration) {
        match outcome {
            AccessOutcome::Hit => self.hits += 1,
            AccessOutcome::Miss => self.misses += 1,
        }
        self.latencies.push(latency);
    }

    /// Returns the number of requests recorded so far.
    pub fn requests(&self) -> u64 {
        self.latencies.len() as u64
    }
}

/// Final derived metrics of a benchmark run.
///
/// Serialization uses exactly these field names; they are the stable
/// contract of the `results.json` artifact.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    /// Requests processed across all workers.
    pub total_requests: u64,
    /// Mean service latency in microseconds.
    pub avg_latency_us: f64,
    /// Completed requests per wall-clock second.
    pub throughput_ops_per_sec: f64,
    /// Hits over classified accesses, in `[0, 1]`.
    pub hit_rate: f64,
    /// Wall-clock duration of the run in seconds (spawn to last join).
    pub duration_s: f64,
}

impl Summary {
    /// Derives a summary from merged totals.
    ///
    /// Every ratio is guarded: an empty run (no requests, no classified
    /// accesses, or a zero-length clock) yields `0.0` for the affected
    /// metrics rather than a NaN or a panic.
    ///
    /// # Arguments
    ///
    /// * `hits` - Total hits across workers.
    /// * `misses` - Total misses across workers.
    /// * `latencies` - Every recorded latency.
    /// * `elapsed` - Wall-clock time from spawn to last join.
    pub fn from_totals(hits: u64, misses: u64, latencies: &[Duration], elapsed: Duration) -> Self {
        let total_requests = latencies.len() as u64;
        let elapsed_s = elapsed.as_secs_f64();

        // Sum as Duration so the mean is exact integer arithmetic until the
        // final division; merge order can then never perturb it.
        let avg_latency_us = if total_requests > 0 {
            let total: Duration = latencies.iter().sum();
            total.as_secs_f64() * 1e6 / total_requests as f64
        } else {
            0.0
        };

        let throughput_ops_per_sec = if elapsed_s > 0.0 {
            total_requests as f64 / elapsed_s
        } else {
            0.0
        };

        let classified = hits + misses;
        let hit_rate = if classified > 0 {
            hits as f64 / classified as f64
        } else {
            0.0
        };

        Self {
            total_requests,
            avg_latency_us,
            throughput_ops_per_sec,
            hit_rate,
            duration_s: elapsed_s,
        }
    }

    /// Prints the summary to stdout in the standard banner format.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("MEMORY HIERARCHY BENCHMARK SUMMARY");
        println!("==========================================================");
        println!("requests                 {}", self.total_requests);
        println!("avg_latency              {:.3} us", self.avg_latency_us);
        println!("throughput               {:.0} ops/s", self.throughput_ops_per_sec);
        println!("hit_rate                 {:.2} %", self.hit_rate * 100.0);
        println!("wall_time                {:.4} s", self.duration_s);
        println!("==========================================================");
    }
}

/// Everything a finished run produces: the derived summary plus the raw
/// latency sequence for external analysis.
#[derive(Clone, Debug)]
pub struct RunOutput {
    /// Derived metrics.
    pub summary: Summary,
    /// Every recorded latency, worker merge order.
    pub latencies: Vec<Duration>,
}
