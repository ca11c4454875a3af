//! Benchmark orchestration and result handling.
//!
//! Provides the concurrent driver that executes a configured run, the
//! shared aggregator the workers merge into, and the persistence of result
//! artifacts.

/// Shared aggregation of per-worker results.
pub mod aggregate;

/// Result artifact persistence (JSON summary, CSV latencies).
pub mod report;

/// The concurrent benchmark driver.
pub mod runner;

pub use aggregate::ResultsAggregator;
pub use runner::BenchmarkRunner;
