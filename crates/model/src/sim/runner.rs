//! Concurrent benchmark driver.
//!
//! This module owns the run: it resolves the effective seed, derives the
//! workload geometry, spawns the fixed worker pool, and times the whole
//! thing from spawn to last join. Each worker is a plain OS thread with its
//! own address generator and its own result buffer; the only shared state
//! on the request path is the cache's per-set locking.

use std::sync::Arc;
use std::thread;
use std::time::Instant;

use tracing::{debug, info};

use crate::cache::CacheModel;
use crate::common::Error;
use crate::config::Config;
use crate::mem::LatencyModel;
use crate::sim::aggregate::ResultsAggregator;
use crate::stats::{RunOutput, WorkerResult};
use crate::workload::AddressGenerator;

/// Drives one benchmark run from a [`Config`].
///
/// Construction resolves everything randomness-dependent (the effective
/// seed) and everything geometry-dependent (the block-address space, the
/// cache), so a runner describes a fully determined experiment before a
/// single thread starts.
#[derive(Debug)]
pub struct BenchmarkRunner {
    config: Config,
    cache: Arc<CacheModel>,
    latency: LatencyModel,
    num_blocks: u64,
    seed: u64,
}

impl BenchmarkRunner {
    /// Creates a runner for the given configuration.
    ///
    /// The effective seed is `benchmark.random_seed` when set, otherwise
    /// drawn from entropy; it is fixed here so the whole workload is
    /// determined before any thread starts, and [`BenchmarkRunner::seed`]
    /// can report it for reproduction. The block-address space is
    /// `working_set / line_size`, clamped to at least one block.
    pub fn new(config: Config) -> Self {
        let cache = Arc::new(CacheModel::new(&config.cache));
        let latency = LatencyModel::new(&config.memory);

        let line_size = config.cache.line_size_bytes.max(1);
        let num_blocks = ((config.benchmark.working_set_kb * 1024 / line_size) as u64).max(1);
        let seed = config.benchmark.random_seed.unwrap_or_else(rand::random);

        Self {
            config,
            cache,
            latency,
            num_blocks,
            seed,
        }
    }

    /// Executes the benchmark and returns the aggregated output.
    ///
    /// The request budget is split evenly: each of the `max(1, num_threads)`
    /// workers processes `num_requests / workers` requests (integer
    /// division; the remainder is not issued). Workers classify every
    /// access at the cache and carry the outcome to their local buffer;
    /// each merges into the shared aggregator exactly once.
    ///
    /// With a fixed seed the per-worker address streams are reproducible
    /// for any worker count. The hit/miss classification is additionally
    /// exact across runs for a single worker; with several workers the
    /// interleaving may shift individual outcomes but never the processed
    /// total.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WorkerPanic`] if any worker thread panicked. The
    /// run is abandoned in that case: a partial result would misstate the
    /// configured request budget.
    pub fn run(&self) -> Result<RunOutput, Error> {
        let workers = self.config.benchmark.num_threads.max(1);
        let quota = self.config.benchmark.num_requests / workers as u64;

        debug!(workers, quota, seed = self.seed, "spawning benchmark workers");

        let aggregator = Arc::new(ResultsAggregator::new());
        let start = Instant::now();

        let mut handles = Vec::with_capacity(workers);
        for index in 0..workers {
            let cache = Arc::clone(&self.cache);
            let aggregator = Arc::clone(&aggregator);
            let latency = self.latency;
            let pattern = self.config.benchmark.access_pattern;
            let num_blocks = self.num_blocks;
            let seed = self.seed;

            handles.push(thread::spawn(move || {
                let mut generator = AddressGenerator::for_worker(pattern, num_blocks, seed, index);
                let mut local = WorkerResult::with_capacity(quota as usize);

                for _ in 0..quota {
                    let addr = generator.next_addr();
                    let outcome = cache.access(addr);
                    local.record(outcome, latency.latency(outcome));
                }

                debug!(
                    worker = index,
                    hits = local.hits,
                    misses = local.misses,
                    "worker finished"
                );
                aggregator.merge(local);
            }));
        }

        let mut failed = None;
        for (index, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() && failed.is_none() {
                failed = Some(index);
            }
        }
        let elapsed = start.elapsed();

        if let Some(index) = failed {
            return Err(Error::WorkerPanic { index });
        }

        let output = aggregator.finalize(elapsed);
        info!(
            requests = output.summary.total_requests,
            hit_rate = output.summary.hit_rate,
            elapsed_s = output.summary.duration_s,
            "benchmark complete"
        );
        Ok(output)
    }

    /// Returns the configuration this runner was built from.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the shared cache model.
    pub fn cache(&self) -> &CacheModel {
        &self.cache
    }

    /// Returns the effective seed of this runner.
    ///
    /// Feeding this value back in as `benchmark.random_seed` replays the
    /// same workload, which is the supported way to reproduce an
    /// entropy-seeded run.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the size of the block-address space.
    pub const fn num_blocks(&self) -> u64 {
        self.num_blocks
    }
}
