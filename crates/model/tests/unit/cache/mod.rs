//! Unit tests for the cache layer.


/// Tests for the per-set LRU bookkeeping.
pub mod lru_set;
