//! Block address type.
//!
//! The model works entirely in block granularity: the working set is divided
//! by the cache line size up front, and every request names one block. This
//! module provides a strong type for those addresses so they cannot be
//! confused with raw counters or byte offsets. It provides the following:
//! 1. **Type Safety:** Distinguishes block addresses from plain integers at compile time.
//! 2. **Cheap Conversion:** Zero-cost wrapping and unwrapping on the hot request path.

/// A block address in the working set.
///
/// Valid addresses are in `0..num_blocks`, where `num_blocks` is derived
/// from the configured working-set size and line size. The cache decomposes
/// a block address into a set index and a tag; there are no byte addresses
/// anywhere in the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockAddr(pub u64);

impl BlockAddr {
    /// Creates a new block address from a raw 64-bit value.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw block number.
    ///
    /// # Returns
    ///
    /// A new `BlockAddr` instance wrapping the provided block number.
    #[inline(always)]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw block number.
    ///
    /// # Returns
    ///
    /// The underlying 64-bit block number.
    #[inline(always)]
    pub const fn val(&self) -> u64 {
        self.0
    }
}
