//! Per-Set LRU Bookkeeping Unit Tests.
//!
//! Verifies the O(1) LRU engine underneath the cache model: hit and miss
//! classification, promotion on touch, eviction of exactly the least
//! recently used tag, and the capacity bound under arbitrary access
//! sequences.

use std::collections::HashSet;

use proptest::prelude::*;

use memsim_core::cache::lru::LruSet;

// ══════════════════════════════════════════════════════════
// 1. Construction
// ══════════════════════════════════════════════════════════

/// A fresh set is empty and reports the configured capacity.
#[test]
fn new_set_is_empty() {
    let set = LruSet::new(4);

    assert!(set.is_empty(), "fresh set should hold no tags");
    assert_eq!(set.len(), 0, "fresh set length should be zero");
    assert_eq!(set.capacity(), 4, "capacity should match construction");
}

/// Zero capacity is clamped to one slot instead of producing a set that
/// can never hold anything.
#[test]
fn zero_capacity_is_clamped_to_one() {
    let mut set = LruSet::new(0);

    assert_eq!(set.capacity(), 1, "degenerate capacity should clamp to 1");
    assert!(!set.access(7), "first access should miss");
    assert!(set.access(7), "the single slot should retain the tag");
}

// ══════════════════════════════════════════════════════════
// 2. Hit/Miss Classification
// ══════════════════════════════════════════════════════════

/// First touch of a tag is a miss, the second touch is a hit.
#[test]
fn cold_miss_then_warm_hit() {
    let mut set = LruSet::new(2);

    assert!(!set.access(1), "first access to a tag should miss");
    assert!(set.access(1), "second access to the same tag should hit");
    assert_eq!(set.len(), 1, "one resident tag after repeated touches");
}

/// Distinct tags fill distinct slots until the set is full.
#[test]
fn distinct_tags_accumulate_up_to_capacity() {
    let mut set = LruSet::new(2);

    assert!(!set.access(1), "tag 1 cold miss");
    assert!(!set.access(2), "tag 2 cold miss");
    assert_eq!(set.len(), 2, "both tags resident");
    assert!(set.contains(1), "tag 1 resident");
    assert!(set.contains(2), "tag 2 resident");
}

// ══════════════════════════════════════════════════════════
// 3. Eviction Order
// ══════════════════════════════════════════════════════════

/// Inserting into a full set evicts the least recently used tag.
#[test]
fn full_set_evicts_least_recently_used() {
    let mut set = LruSet::new(2);

    let _ = set.access(1);
    let _ = set.access(2);
    assert!(!set.access(3), "insertion into a full set is a miss");

    assert!(!set.contains(1), "tag 1 was LRU and must be evicted");
    assert!(set.contains(2), "tag 2 survives");
    assert!(set.contains(3), "tag 3 was just inserted");
    assert_eq!(set.len(), 2, "occupancy stays at capacity");
}

/// A hit promotes the touched tag, changing the eviction victim.
#[test]
fn hit_promotion_changes_victim() {
    let mut set = LruSet::new(2);

    let _ = set.access(1);
    let _ = set.access(2);
    assert!(set.access(1), "re-touching tag 1 should hit");

    let _ = set.access(3);
    assert!(set.contains(1), "promoted tag 1 survives the eviction");
    assert!(!set.contains(2), "tag 2 became LRU after the promotion");
    assert!(set.contains(3), "tag 3 was just inserted");
}

/// Membership probes must not touch recency order: a probed LRU tag is
/// still the next victim.
#[test]
fn contains_does_not_promote() {
    let mut set = LruSet::new(2);

    let _ = set.access(1);
    let _ = set.access(2);
    assert!(set.contains(1), "tag 1 is resident before the eviction");

    let _ = set.access(3);
    assert!(
        !set.contains(1),
        "tag 1 must still be the victim; contains() is not a touch"
    );
    assert!(set.contains(2), "tag 2 survives");
    assert!(set.contains(3), "tag 3 was just inserted");
}

/// Continuous eviction pressure cycles through victims strictly in
/// recency order.
#[test]
fn eviction_follows_recency_order_under_pressure() {
    let mut set = LruSet::new(2);

    let _ = set.access(10);
    let _ = set.access(20);
    let _ = set.access(30); // evicts 10
    assert!(!set.contains(10), "tag 10 evicted first");

    let _ = set.access(40); // evicts 20
    assert!(!set.contains(20), "tag 20 evicted second");
    assert!(set.contains(30), "tag 30 resident");
    assert!(set.contains(40), "tag 40 resident");
}

// ══════════════════════════════════════════════════════════
// 4. Capacity Invariant (property)
// ══════════════════════════════════════════════════════════

proptest! {
    /// For arbitrary access sequences the occupancy never exceeds the
    /// capacity, and equals the number of distinct tags seen once that
    /// is capped.
    #[test]
    fn occupancy_never_exceeds_capacity(
        capacity in 1_usize..8,
        tags in prop::collection::vec(0_u64..32, 0..256),
    ) {
        let mut set = LruSet::new(capacity);
        let mut seen = HashSet::new();

        for &tag in &tags {
            let _ = set.access(tag);
            let _ = seen.insert(tag);
            prop_assert!(set.len() <= set.capacity(), "occupancy above capacity");
        }

        prop_assert_eq!(set.len(), seen.len().min(capacity));
    }
}
