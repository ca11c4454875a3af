//! Benchmark Runner Unit Tests.
//!
//! Verifies whole runs end to end: the quota split and its truncation,
//! hit-rate bounds, single-worker determinism, disabled-cache behavior,
//! geometry clamps, and the empty run.

use memsim_core::config::{AccessPattern, Config};
use memsim_core::sim::BenchmarkRunner;

// ──────────────────────────────────────────────────────────
// Helper: small, seeded run configuration
// ──────────────────────────────────────────────────────────

/// A fast deterministic run: 64 KiB cache, 256 KiB working set, seeded.
fn test_config(requests: u64, threads: usize, pattern: AccessPattern) -> Config {
    let mut config = Config::default();
    config.benchmark.working_set_kb = 256;
    config.benchmark.num_requests = requests;
    config.benchmark.num_threads = threads;
    config.benchmark.access_pattern = pattern;
    config.benchmark.random_seed = Some(42);
    config
}

// ══════════════════════════════════════════════════════════
// 1. Quota Split
// ══════════════════════════════════════════════════════════

/// Every worker processes its full quota: the total equals
/// `(num_requests / workers) * workers` for a divisible budget.
#[test]
fn divisible_budget_is_fully_processed() {
    let runner = BenchmarkRunner::new(test_config(1000, 4, AccessPattern::Mixed));
    let output = runner.run().unwrap();

    assert_eq!(output.summary.total_requests, 1000);
    assert_eq!(output.latencies.len(), 1000, "one latency per processed request");
}

/// A non-divisible budget drops the remainder: 10 requests over 3
/// workers processes 9.
#[test]
fn non_divisible_budget_truncates() {
    let runner = BenchmarkRunner::new(test_config(10, 3, AccessPattern::Sequential));
    let output = runner.run().unwrap();

    assert_eq!(output.summary.total_requests, 9, "3 workers x 3 requests, 1 dropped");
}

/// Zero workers clamps to one instead of dividing the budget by zero.
#[test]
fn zero_threads_clamps_to_one_worker() {
    let runner = BenchmarkRunner::new(test_config(100, 0, AccessPattern::Sequential));
    let output = runner.run().unwrap();

    assert_eq!(output.summary.total_requests, 100, "one worker takes the whole budget");
}

/// A zero-request run completes with the all-zero summary.
#[test]
fn empty_run_completes() {
    let runner = BenchmarkRunner::new(test_config(0, 4, AccessPattern::Mixed));
    let output = runner.run().unwrap();

    assert_eq!(output.summary.total_requests, 0);
    assert_eq!(output.summary.avg_latency_us, 0.0);
    assert_eq!(output.summary.hit_rate, 0.0);
    assert!(output.latencies.is_empty());
}

// ══════════════════════════════════════════════════════════
// 2. Hit Rate
// ══════════════════════════════════════════════════════════

/// The hit rate is a proper fraction for every pattern.
#[test]
fn hit_rate_is_bounded() {
    for pattern in [
        AccessPattern::Sequential,
        AccessPattern::Random,
        AccessPattern::Mixed,
    ] {
        let runner = BenchmarkRunner::new(test_config(2000, 4, pattern));
        let summary = runner.run().unwrap().summary;
        assert!(
            (0.0..=1.0).contains(&summary.hit_rate),
            "hit rate {} out of bounds ({pattern})",
            summary.hit_rate
        );
    }
}

/// A sequential loop over a working set that fits the cache converges to
/// near-perfect hits: one warmup miss per block, hits forever after.
#[test]
fn fitting_sequential_loop_converges_to_hits() {
    let mut config = test_config(100_000, 1, AccessPattern::Sequential);
    // 32 KiB working set inside a 64 KiB cache: 512 blocks, all resident
    // after the first lap.
    config.benchmark.working_set_kb = 32;
    let runner = BenchmarkRunner::new(config);

    let summary = runner.run().unwrap().summary;
    assert!(
        summary.hit_rate > 0.99,
        "only 512 warmup misses in 100k requests, got hit rate {}",
        summary.hit_rate
    );
}

/// With the cache disabled every access misses and the hit rate is zero.
#[test]
fn disabled_cache_yields_zero_hit_rate() {
    let mut config = test_config(1000, 4, AccessPattern::Sequential);
    config.cache.enabled = false;
    let runner = BenchmarkRunner::new(config);

    let summary = runner.run().unwrap().summary;
    assert_eq!(summary.hit_rate, 0.0);
    assert_eq!(summary.total_requests, 1000, "misses are still processed requests");
}

// ══════════════════════════════════════════════════════════
// 3. Determinism
// ══════════════════════════════════════════════════════════

/// Two single-worker runs with the same seed classify identically: same
/// hit rate, same request count, same latency multiset.
#[test]
fn single_worker_runs_are_deterministic() {
    let config = test_config(5000, 1, AccessPattern::Mixed);
    let a = BenchmarkRunner::new(config.clone()).run().unwrap();
    let b = BenchmarkRunner::new(config).run().unwrap();

    assert_eq!(a.summary.total_requests, b.summary.total_requests);
    assert!((a.summary.hit_rate - b.summary.hit_rate).abs() < f64::EPSILON);
    assert_eq!(a.latencies, b.latencies, "one worker, one interleaving, one trace");
}

/// Multi-worker runs with the same seed keep the same totals even though
/// the interleaving may shift individual classifications.
#[test]
fn multi_worker_totals_are_stable() {
    let config = test_config(4000, 4, AccessPattern::Random);
    let a = BenchmarkRunner::new(config.clone()).run().unwrap();
    let b = BenchmarkRunner::new(config).run().unwrap();

    assert_eq!(a.summary.total_requests, 4000);
    assert_eq!(b.summary.total_requests, 4000);
}

// ══════════════════════════════════════════════════════════
// 4. Runner Surface
// ══════════════════════════════════════════════════════════

/// The runner reports the configured seed and the derived block space.
#[test]
fn runner_reports_seed_and_geometry() {
    let runner = BenchmarkRunner::new(test_config(100, 1, AccessPattern::Mixed));

    assert_eq!(runner.seed(), 42, "configured seed is the effective seed");
    // 256 KiB working set over 64-byte lines.
    assert_eq!(runner.num_blocks(), 4096);
    assert_eq!(runner.config().benchmark.num_requests, 100);
}

/// An unseeded runner draws a seed from entropy and still exposes it for
/// reproduction.
#[test]
fn entropy_seed_is_exposed() {
    let mut config = test_config(10, 1, AccessPattern::Random);
    config.benchmark.random_seed = None;

    let runner = BenchmarkRunner::new(config.clone());
    config.benchmark.random_seed = Some(runner.seed());

    let replay = BenchmarkRunner::new(config);
    assert_eq!(replay.seed(), runner.seed());
    assert_eq!(
        runner.run().unwrap().latencies,
        replay.run().unwrap().latencies,
        "replaying the reported seed reproduces the run"
    );
}
