//! Per-set LRU bookkeeping.
//!
//! Each cache set tracks its resident tags with a hash map from tag to slot
//! plus an intrusive doubly-linked recency list threaded through a fixed
//! slot arena. Both hit promotion and miss insertion (including eviction)
//! are O(1); there is no ordered scan anywhere on the access path.

use std::collections::HashMap;

/// Sentinel slot index marking the end of the recency list.
const NIL: usize = usize::MAX;

/// One slot in the arena: a resident tag and its recency-list links.
#[derive(Clone, Copy, Debug)]
struct Slot {
    tag: u64,
    prev: usize,
    next: usize,
}

/// A single cache set with true LRU replacement.
///
/// The map and the list always describe the same resident tags: every map
/// entry points at a linked slot and every linked slot has a map entry.
/// Occupancy never exceeds the capacity fixed at construction.
#[derive(Debug)]
pub struct LruSet {
    /// Resident tag to slot index.
    map: HashMap<u64, usize>,
    /// Fixed arena; slots are recycled through `free`, never reallocated.
    slots: Vec<Slot>,
    /// Most recently used slot, `NIL` when empty.
    head: usize,
    /// Least recently used slot, `NIL` when empty.
    tail: usize,
    /// Unlinked slots available for insertion.
    free: Vec<usize>,
}

impl LruSet {
    /// Creates an empty set with room for `capacity` tags (clamped to at
    /// least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            map: HashMap::with_capacity(capacity),
            slots: vec![
                Slot {
                    tag: 0,
                    prev: NIL,
                    next: NIL,
                };
                capacity
            ],
            head: NIL,
            tail: NIL,
            free: (0..capacity).rev().collect(),
        }
    }

    /// Touches `tag`, returning `true` if it was already resident.
    ///
    /// On a hit the tag is promoted to most recently used. On a miss the tag
    /// is inserted as most recently used, evicting the least recently used
    /// tag first if the set is full. Exactly one recency update happens per
    /// call.
    ///
    /// # Panics
    ///
    /// This function will not panic. Every slot index it follows comes from
    /// the map, the free list, or the recency links, all of which stay
    /// within the arena; the tail is never `NIL` when the free list is
    /// empty because capacity is at least one.
    pub fn access(&mut self, tag: u64) -> bool {
        if let Some(&slot) = self.map.get(&tag) {
            self.detach(slot);
            self.push_front(slot);
            return true;
        }

        let slot = match self.free.pop() {
            Some(slot) => slot,
            None => {
                let victim = self.tail;
                self.detach(victim);
                let _ = self.map.remove(&self.slots[victim].tag);
                victim
            }
        };

        self.slots[slot].tag = tag;
        self.push_front(slot);
        let _ = self.map.insert(tag, slot);
        false
    }

    /// Returns `true` if `tag` is resident, without touching recency order.
    pub fn contains(&self, tag: u64) -> bool {
        self.map.contains_key(&tag)
    }

    /// Returns the number of resident tags.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if no tags are resident.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the fixed capacity of the set.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Unlinks `slot` from the recency list, fixing up head and tail.
    fn detach(&mut self, slot: usize) {
        let Slot { prev, next, .. } = self.slots[slot];
        if prev == NIL {
            self.head = next;
        } else {
            self.slots[prev].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.slots[next].prev = prev;
        }
    }

    /// Links `slot` in at the head of the recency list as most recently
    /// used.
    fn push_front(&mut self, slot: usize) {
        self.slots[slot].prev = NIL;
        self.slots[slot].next = self.head;
        if self.head != NIL {
            self.slots[self.head].prev = slot;
        }
        self.head = slot;
        if self.tail == NIL {
            self.tail = slot;
        }
    }
}
