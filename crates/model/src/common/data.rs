//! Access outcome classification.
//!
//! Every cache access is classified at the point where it happens and the
//! classification travels with the request from there on. Latency is looked
//! up *from* the outcome; the outcome is never reconstructed from a latency
//! value, so configurations where two tiers share a latency stay unambiguous.

/// The result of a single cache access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessOutcome {
    /// The block was resident; the request is served from SRAM.
    Hit,
    /// The block was absent (or the cache is disabled); the request is
    /// served from DRAM.
    Miss,
}

impl AccessOutcome {
    /// Returns `true` for [`AccessOutcome::Hit`].
    #[inline(always)]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }
}
