//! Set-Associative LRU Cache Model.
//!
//! This module implements the shared cache that all benchmark workers hit
//! concurrently. It models residency only: an access updates per-set LRU
//! bookkeeping and reports hit or miss, nothing is stored or copied.
//! Synchronization is per set, so workers touching different sets never
//! contend on a lock.

/// Per-set LRU bookkeeping (hash map plus intrusive recency list).
pub mod lru;

use std::sync::{Mutex, PoisonError};

use self::lru::LruSet;
use crate::common::{AccessOutcome, BlockAddr};
use crate::config::CacheConfig;

/// Geometry and occupancy snapshot of a [`CacheModel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheStats {
    /// Total capacity in bytes.
    pub capacity_bytes: usize,
    /// Line size in bytes.
    pub line_size: usize,
    /// Ways per set.
    pub associativity: usize,
    /// Number of sets.
    pub num_sets: usize,
    /// Resident lines summed across all sets.
    pub used_lines: usize,
}

/// Set-associative cache with per-set locking and true LRU replacement.
///
/// Block addresses decompose as `set_index = addr % num_sets` and
/// `tag = addr / num_sets`. Each set is an independent [`LruSet`] behind its
/// own mutex; an access locks exactly the one set it lands in. A disabled
/// cache reports every access as a miss and never mutates anything.
#[derive(Debug)]
pub struct CacheModel {
    /// When false, accesses bypass the cache entirely and report misses.
    enabled: bool,
    sets: Vec<Mutex<LruSet>>,
    num_sets: usize,
    ways: usize,
    line_size: usize,
    capacity_bytes: usize,
}

impl CacheModel {
    /// Creates a new cache model with the specified configuration.
    ///
    /// Degenerate geometry is clamped, never rejected: associativity and
    /// line size are raised to at least one, and the derived set count is
    /// raised to at least one set, so every configuration yields a working
    /// cache.
    ///
    /// # Arguments
    ///
    /// * `config` - Cache configuration specifying capacity, line size,
    ///   associativity, and whether the cache is enabled at all.
    pub fn new(config: &CacheConfig) -> Self {
        let ways = config.associativity.max(1);
        let line_size = config.line_size_bytes.max(1);
        let capacity_bytes = config.size_kb * 1024;

        let total_lines = capacity_bytes / line_size;
        let num_sets = (total_lines / ways).max(1);

        let sets = (0..num_sets).map(|_| Mutex::new(LruSet::new(ways))).collect();

        Self {
            enabled: config.enabled,
            sets,
            num_sets,
            ways,
            line_size,
            capacity_bytes,
        }
    }

    /// Accesses the cache for the specified block address.
    ///
    /// Locks the one set the address maps to and performs exactly one
    /// recency update there: a resident tag is promoted to most recently
    /// used, an absent tag is inserted (evicting the LRU tag if the set is
    /// full). The returned outcome is the only place hit/miss is decided;
    /// callers carry it forward rather than re-deriving it.
    ///
    /// # Arguments
    ///
    /// * `addr` - The block address to access.
    ///
    /// # Returns
    ///
    /// [`AccessOutcome::Hit`] if the block was resident, otherwise
    /// [`AccessOutcome::Miss`]. A disabled cache always reports a miss.
    ///
    /// # Panics
    ///
    /// This function will not panic: the set index is always `< num_sets`
    /// by the modulo decomposition, and a poisoned set lock (a worker died
    /// mid-update; that failure is reported at join time) is recovered
    /// rather than unwrapped.
    pub fn access(&self, addr: BlockAddr) -> AccessOutcome {
        if !self.enabled {
            return AccessOutcome::Miss;
        }

        let (set_index, tag) = self.decompose(addr);
        let mut set = self.sets[set_index]
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if set.access(tag) {
            AccessOutcome::Hit
        } else {
            AccessOutcome::Miss
        }
    }

    /// Checks whether the cache currently holds the specified block.
    ///
    /// Unlike [`CacheModel::access`] this does not touch recency order; it
    /// exists for diagnostics and tests that need to observe eviction
    /// decisions without perturbing them.
    pub fn contains(&self, addr: BlockAddr) -> bool {
        if !self.enabled {
            return false;
        }

        let (set_index, tag) = self.decompose(addr);
        self.sets[set_index]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(tag)
    }

    /// Returns a geometry and occupancy snapshot.
    ///
    /// Occupancy is gathered set by set under each set's own lock; a
    /// concurrent snapshot is therefore approximate across sets but exact
    /// within each.
    pub fn stats(&self) -> CacheStats {
        let used_lines = self
            .sets
            .iter()
            .map(|set| set.lock().unwrap_or_else(PoisonError::into_inner).len())
            .sum();

        CacheStats {
            capacity_bytes: self.capacity_bytes,
            line_size: self.line_size,
            associativity: self.ways,
            num_sets: self.num_sets,
            used_lines,
        }
    }

    /// Returns whether cache modeling is enabled.
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Splits a block address into its set index and tag.
    #[inline(always)]
    fn decompose(&self, addr: BlockAddr) -> (usize, u64) {
        let set_index = (addr.val() % self.num_sets as u64) as usize;
        let tag = addr.val() / self.num_sets as u64;
        (set_index, tag)
    }
}
