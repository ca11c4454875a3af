//! Workload address stream generation.
//!
//! This module produces the per-worker request streams that drive the
//! benchmark. It provides:
//! 1. **Patterns:** Sequential, uniform random, and mixed address streams.
//! 2. **Ownership:** One generator per worker, never shared and never locked.
//! 3. **Seeding:** Worker seeds derived from one global seed, so a fixed
//!    seed reproduces every worker's stream while distinct workers draw
//!    from distinct streams.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::common::BlockAddr;
use crate::config::AccessPattern;

/// Probability of taking the sequential branch in the mixed pattern.
///
/// A fixed design constant of the workload shape, not configuration: mixed
/// means "mostly sequential with occasional jumps" by definition here.
pub const SEQUENTIAL_BIAS: f64 = 0.8;

/// Increment used to space worker seeds before mixing (the splitmix64
/// golden-ratio gamma).
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Stateful generator for one worker's block-address stream.
///
/// Holds the sequential cursor and the worker's own RNG. Every produced
/// address is in `0..num_blocks`; the sequential cursor starts at zero and
/// wraps at the working-set end. The mixed pattern advances the cursor only
/// when it takes the sequential branch, so random jumps do not skip blocks.
#[derive(Debug)]
pub struct AddressGenerator {
    pattern: AccessPattern,
    num_blocks: u64,
    cursor: u64,
    rng: StdRng,
}

impl AddressGenerator {
    /// Creates a generator over `num_blocks` blocks (clamped to at least
    /// one) seeded with `seed`.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The address pattern to produce.
    /// * `num_blocks` - Size of the block-address space.
    /// * `seed` - RNG seed; equal seeds produce equal streams.
    pub fn new(pattern: AccessPattern, num_blocks: u64, seed: u64) -> Self {
        Self {
            pattern,
            num_blocks: num_blocks.max(1),
            cursor: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates the generator for one worker of a run.
    ///
    /// The worker's seed is derived from the run's global seed and the
    /// worker index with a splitmix64 finalizer, so workers never share an
    /// RNG (and never contend on one) yet the whole run is reproducible
    /// from the single global seed.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The address pattern to produce.
    /// * `num_blocks` - Size of the block-address space.
    /// * `global_seed` - The run-wide seed.
    /// * `worker_index` - Zero-based index of the owning worker.
    pub fn for_worker(
        pattern: AccessPattern,
        num_blocks: u64,
        global_seed: u64,
        worker_index: usize,
    ) -> Self {
        Self::new(
            pattern,
            num_blocks,
            derive_seed(global_seed, worker_index as u64),
        )
    }

    /// Produces the next block address in the stream.
    pub fn next_addr(&mut self) -> BlockAddr {
        let addr = match self.pattern {
            AccessPattern::Sequential => self.step(),
            AccessPattern::Random => self.rng.gen_range(0..self.num_blocks),
            AccessPattern::Mixed => {
                if self.rng.gen_bool(SEQUENTIAL_BIAS) {
                    self.step()
                } else {
                    self.rng.gen_range(0..self.num_blocks)
                }
            }
        };
        BlockAddr::new(addr)
    }

    /// Returns the current sequential cursor then advances it, wrapping at
    /// the working-set end.
    fn step(&mut self) -> u64 {
        let addr = self.cursor;
        self.cursor = (self.cursor + 1) % self.num_blocks;
        addr
    }
}

/// Mixes a global seed and a worker index into a worker seed (splitmix64
/// finalizer over golden-gamma spaced inputs).
fn derive_seed(global_seed: u64, worker_index: u64) -> u64 {
    let mut z = global_seed.wrapping_add(GOLDEN_GAMMA.wrapping_mul(worker_index.wrapping_add(1)));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
