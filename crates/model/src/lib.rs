//! Memory-hierarchy latency and throughput model.
//!
//! This crate implements a concurrent benchmark over a modeled memory
//! hierarchy with the following:
//! 1. **Workload:** Per-worker address generators (sequential, random, mixed).
//! 2. **Cache:** A shared set-associative LRU cache with per-set locking.
//! 3. **Memory:** A pure tier-latency table (SRAM, DRAM, flash).
//! 4. **Driver:** A fixed pool of worker threads splitting one request budget.
//! 5. **Results:** Lock-free per-worker accumulation, merge-once aggregation,
//!    and artifact persistence (JSON summary, CSV latencies).
//!
//! Nothing is stored or moved: a cache access only updates recency
//! bookkeeping and yields an outcome, and latency is a number looked up
//! from that outcome, never a real delay.

/// Set-associative LRU cache model with per-set locking.
pub mod cache;
/// Common types (block addresses, access outcomes, errors).
pub mod common;
/// Model configuration (defaults, enums, hierarchical config structures).
pub mod config;
/// Memory tier latency table.
pub mod mem;
/// Benchmark driver, result aggregation, and artifact persistence.
pub mod sim;
/// Result types and summary reporting.
pub mod stats;
/// Workload address stream generation.
pub mod workload;

/// Root configuration type; use `Config::default()` or load JSON with `Config::from_file`.
pub use crate::config::Config;
/// The concurrent benchmark driver; construct with `BenchmarkRunner::new`.
pub use crate::sim::BenchmarkRunner;
/// Final derived metrics of a run.
pub use crate::stats::Summary;
