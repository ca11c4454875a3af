//! Configuration system for the memory-hierarchy model.
//!
//! This module defines all configuration structures and enums used to
//! parameterize a benchmark run. It provides:
//! 1. **Defaults:** Baseline geometry and timing constants (cache, tiers, workload).
//! 2. **Structures:** Hierarchical config for cache, memory, benchmark, and output.
//! 3. **Enums:** The access pattern selector for the workload generator.
//! 4. **Loading:** JSON file loading with typed read/parse errors.
//!
//! Every field is individually defaulted, so a config file only needs to name
//! the values it overrides. `Config::default()` is a complete, runnable
//! configuration.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::Error;

/// Default configuration constants for the model.
///
/// These values define the baseline benchmark configuration when not
/// explicitly overridden in a JSON configuration file.
mod defaults {
    /// Default cache capacity in KiB.
    pub const CACHE_SIZE_KB: usize = 64;

    /// Default cache line size in bytes.
    ///
    /// Matches typical modern processor cache line sizes. The working set is
    /// divided by this value to obtain the block-address space.
    pub const CACHE_LINE: usize = 64;

    /// Default cache associativity (4 ways per set).
    pub const CACHE_WAYS: usize = 4;

    /// Default DRAM access latency in nanoseconds.
    ///
    /// Charged for every miss: the model treats DRAM as the backing tier.
    pub const DRAM_LATENCY_NS: u64 = 100;

    /// Default SRAM access latency in nanoseconds.
    ///
    /// Charged for every hit: resident blocks are served at cache speed.
    pub const SRAM_LATENCY_NS: u64 = 10;

    /// Default flash access latency in nanoseconds.
    ///
    /// The flash tier is configured and queryable but no access outcome maps
    /// to it; see [`crate::mem::LatencyModel`] for the details of this gap.
    pub const FLASH_LATENCY_NS: u64 = 500;

    /// Default working-set size in KiB.
    ///
    /// At the default line size this yields a 16384-block address space,
    /// sixteen times the default cache capacity.
    pub const WORKING_SET_KB: usize = 1024;

    /// Default number of requests for the whole run (all workers combined).
    pub const NUM_REQUESTS: u64 = 10_000;

    /// Default number of worker threads.
    pub const NUM_THREADS: usize = 4;

    /// Default directory for result artifacts.
    pub const RESULTS_DIR: &str = "results";
}

/// Workload address pattern types.
///
/// Specifies how the address generator walks the working set. Each worker
/// owns an independent generator; the pattern only shapes the stream, it
/// never introduces sharing between workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessPattern {
    /// Strictly ascending block addresses, wrapping at the working-set end.
    ///
    /// Produces the highest spatial locality the model can express.
    #[serde(alias = "Sequential")]
    Sequential,
    /// Independent uniform draws over the whole working set.
    ///
    /// Produces no reuse beyond what capacity allows.
    #[serde(alias = "Random")]
    Random,
    /// Mostly sequential with occasional random jumps.
    ///
    /// Takes the sequential branch with a fixed 0.8 probability and a
    /// uniform random draw otherwise, approximating real pointer-chasing
    /// workloads with hot loops.
    #[default]
    #[serde(alias = "Mixed")]
    Mixed,
}

impl fmt::Display for AccessPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Random => write!(f, "random"),
            Self::Mixed => write!(f, "mixed"),
        }
    }
}

/// Root configuration structure containing all model settings.
///
/// Configuration is supplied as JSON (see [`Config::from_file`]) or built
/// with `Config::default()`. Missing sections and missing keys fall back to
/// their defaults, so `{}` is a valid config file.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use memsim_core::config::Config;
///
/// let config = Config::default();
/// assert!(config.cache.enabled);
/// assert_eq!(config.cache.size_kb, 64);
/// assert_eq!(config.benchmark.num_threads, 4);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use memsim_core::config::{AccessPattern, Config};
///
/// let json = r#"{
///     "cache": {
///         "enabled": true,
///         "size_kb": 128,
///         "line_size_bytes": 64,
///         "associativity": 8
///     },
///     "memory": {
///         "dram_latency_ns": 120,
///         "sram_latency_ns": 8
///     },
///     "benchmark": {
///         "working_set_kb": 2048,
///         "num_requests": 500000,
///         "num_threads": 8,
///         "access_pattern": "random",
///         "random_seed": 42
///     },
///     "output": {
///         "results_dir": "out"
///     }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.cache.associativity, 8);
/// assert_eq!(config.memory.flash_latency_ns, 500);
/// assert_eq!(config.benchmark.access_pattern, AccessPattern::Random);
/// assert_eq!(config.benchmark.random_seed, Some(42));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Cache geometry configuration
    #[serde(default)]
    pub cache: CacheConfig,
    /// Memory tier latency configuration
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Benchmark workload configuration
    #[serde(default)]
    pub benchmark: BenchmarkConfig,
    /// Result artifact configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache: CacheConfig::default(),
            memory: MemoryConfig::default(),
            benchmark: BenchmarkConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigRead`] if the file cannot be read and
    /// [`Error::ConfigParse`] if its contents are not valid configuration
    /// JSON. Both variants carry the offending path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Cache geometry configuration.
///
/// The derived set count is `max(1, size_kb * 1024 / line_size_bytes /
/// associativity)`; degenerate values are clamped rather than rejected, so
/// every geometry is runnable.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Enable the cache. When false every access is a DRAM miss and no
    /// cache state is touched.
    #[serde(default = "CacheConfig::default_enabled")]
    pub enabled: bool,

    /// Total cache capacity in KiB
    #[serde(default = "CacheConfig::default_size_kb")]
    pub size_kb: usize,

    /// Cache line size in bytes
    #[serde(default = "CacheConfig::default_line")]
    pub line_size_bytes: usize,

    /// Associativity (number of ways per set)
    #[serde(default = "CacheConfig::default_ways")]
    pub associativity: usize,
}

impl CacheConfig {
    /// Cache modeling is on unless explicitly disabled.
    fn default_enabled() -> bool {
        true
    }

    /// Returns the default cache capacity in KiB.
    fn default_size_kb() -> usize {
        defaults::CACHE_SIZE_KB
    }

    /// Returns the default cache line size in bytes.
    fn default_line() -> usize {
        defaults::CACHE_LINE
    }

    /// Returns the default cache associativity (number of ways).
    fn default_ways() -> usize {
        defaults::CACHE_WAYS
    }
}

impl Default for CacheConfig {
    /// Creates a default cache configuration: a 64 KiB, 4-way cache with
    /// 64-byte lines, enabled.
    fn default() -> Self {
        Self {
            enabled: true,
            size_kb: defaults::CACHE_SIZE_KB,
            line_size_bytes: defaults::CACHE_LINE,
            associativity: defaults::CACHE_WAYS,
        }
    }
}

/// Memory tier latency configuration.
///
/// All values are nanoseconds per access. The tiers are independent; no
/// ordering between them is required or checked, because access outcomes are
/// classified where they happen and never reverse-engineered from latency
/// values.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// DRAM access latency in nanoseconds (charged per miss)
    #[serde(default = "MemoryConfig::default_dram")]
    pub dram_latency_ns: u64,

    /// SRAM access latency in nanoseconds (charged per hit)
    #[serde(default = "MemoryConfig::default_sram")]
    pub sram_latency_ns: u64,

    /// Flash access latency in nanoseconds (configured third tier)
    #[serde(default = "MemoryConfig::default_flash")]
    pub flash_latency_ns: u64,
}

impl MemoryConfig {
    /// Returns the default DRAM latency in nanoseconds.
    fn default_dram() -> u64 {
        defaults::DRAM_LATENCY_NS
    }

    /// Returns the default SRAM latency in nanoseconds.
    fn default_sram() -> u64 {
        defaults::SRAM_LATENCY_NS
    }

    /// Returns the default flash latency in nanoseconds.
    fn default_flash() -> u64 {
        defaults::FLASH_LATENCY_NS
    }
}

impl Default for MemoryConfig {
    /// Creates a default memory configuration with the 10/100/500 ns
    /// SRAM/DRAM/flash tier table.
    fn default() -> Self {
        Self {
            dram_latency_ns: defaults::DRAM_LATENCY_NS,
            sram_latency_ns: defaults::SRAM_LATENCY_NS,
            flash_latency_ns: defaults::FLASH_LATENCY_NS,
        }
    }
}

/// Benchmark workload configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkConfig {
    /// Working-set size in KiB; divided by the cache line size to obtain
    /// the block-address space
    #[serde(default = "BenchmarkConfig::default_working_set")]
    pub working_set_kb: usize,

    /// Total request budget for the run, split evenly across workers
    /// (integer division; the remainder is dropped)
    #[serde(default = "BenchmarkConfig::default_requests")]
    pub num_requests: u64,

    /// Number of worker threads
    #[serde(default = "BenchmarkConfig::default_threads")]
    pub num_threads: usize,

    /// Address pattern for the workload generators
    #[serde(default)]
    pub access_pattern: AccessPattern,

    /// Seed for the workload generators. `None` seeds from entropy; a fixed
    /// value reproduces every worker's address stream.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl BenchmarkConfig {
    /// Returns the default working-set size in KiB.
    fn default_working_set() -> usize {
        defaults::WORKING_SET_KB
    }

    /// Returns the default request budget.
    fn default_requests() -> u64 {
        defaults::NUM_REQUESTS
    }

    /// Returns the default worker thread count.
    fn default_threads() -> usize {
        defaults::NUM_THREADS
    }
}

impl Default for BenchmarkConfig {
    /// Creates a default benchmark configuration: 10 000 mixed-pattern
    /// requests over a 1 MiB working set, four workers, entropy-seeded.
    fn default() -> Self {
        Self {
            working_set_kb: defaults::WORKING_SET_KB,
            num_requests: defaults::NUM_REQUESTS,
            num_threads: defaults::NUM_THREADS,
            access_pattern: AccessPattern::default(),
            random_seed: None,
        }
    }
}

/// Result artifact configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory for `results.json` and `latencies.csv`; created on demand
    #[serde(default = "OutputConfig::default_results_dir")]
    pub results_dir: String,
}

impl OutputConfig {
    /// Returns the default results directory.
    fn default_results_dir() -> String {
        defaults::RESULTS_DIR.to_owned()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_dir: defaults::RESULTS_DIR.to_owned(),
        }
    }
}
