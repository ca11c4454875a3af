//! Memory tier latency model.
//!
//! This module maps access outcomes to service latencies through a fixed
//! three-tier table. It is pure bookkeeping: nothing waits, nothing is
//! fetched, a lookup just returns the configured cost of the tier that
//! would have served the request.
//!
//! The tier table deliberately has one more row than the outcome mapping
//! can reach: flash carries a configured latency and is queryable through
//! [`LatencyModel::tier_latency`], but no [`AccessOutcome`] selects it. A
//! hit is served by SRAM and a miss by DRAM, full stop. Closing that gap
//! would need an outcome that means "missed DRAM too", which the cache
//! model cannot produce.

use std::time::Duration;

use crate::common::AccessOutcome;
use crate::config::MemoryConfig;

/// The storage tiers of the modeled hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemoryTier {
    /// On-chip cache storage; serves hits.
    Sram,
    /// Main memory; serves misses.
    Dram,
    /// Backing store; configured but unreached by access outcomes.
    Flash,
}

/// Pure outcome-to-latency lookup over the configured tier table.
///
/// Stateless after construction and trivially copyable, so every worker
/// keeps its own copy and the hot loop never shares anything through it.
/// Tier latencies are independent configuration; `sram == dram` is legal
/// and stays unambiguous because outcomes travel as values and are never
/// reconstructed from latencies.
#[derive(Clone, Copy, Debug)]
pub struct LatencyModel {
    sram: Duration,
    dram: Duration,
    flash: Duration,
}

impl LatencyModel {
    /// Creates a latency model from the configured tier table.
    ///
    /// # Arguments
    ///
    /// * `config` - Memory configuration with per-tier latencies in
    ///   nanoseconds.
    pub const fn new(config: &MemoryConfig) -> Self {
        Self {
            sram: Duration::from_nanos(config.sram_latency_ns),
            dram: Duration::from_nanos(config.dram_latency_ns),
            flash: Duration::from_nanos(config.flash_latency_ns),
        }
    }

    /// Returns the tier that serves the given access outcome.
    ///
    /// Total over [`AccessOutcome`]: a hit is served by SRAM, a miss by
    /// DRAM. No outcome reaches [`MemoryTier::Flash`].
    #[inline(always)]
    pub const fn tier_for(outcome: AccessOutcome) -> MemoryTier {
        match outcome {
            AccessOutcome::Hit => MemoryTier::Sram,
            AccessOutcome::Miss => MemoryTier::Dram,
        }
    }

    /// Returns the configured latency of a tier.
    ///
    /// Total over [`MemoryTier`], including flash.
    #[inline(always)]
    pub const fn tier_latency(&self, tier: MemoryTier) -> Duration {
        match tier {
            MemoryTier::Sram => self.sram,
            MemoryTier::Dram => self.dram,
            MemoryTier::Flash => self.flash,
        }
    }

    /// Returns the service latency for an access outcome.
    ///
    /// Composition of [`LatencyModel::tier_for`] and
    /// [`LatencyModel::tier_latency`]; this is the call on the worker hot
    /// path.
    #[inline(always)]
    pub const fn latency(&self, outcome: AccessOutcome) -> Duration {
        self.tier_latency(Self::tier_for(outcome))
    }
}
