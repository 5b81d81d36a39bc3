//! Bounded memoization of merge results.
//!
//! The cache maps the flattened input string (keyed by a fast xxh3 hash)
//! to the fully resolved output. It is a pure memoization of a
//! deterministic function: entries are only ever dropped under capacity
//! pressure, never invalidated. Eviction is generational, the oldest half
//! of entries goes at once, which keeps bookkeeping to a plain queue
//! instead of full LRU tracking.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use tracing::trace;
use xxhash_rust::xxh3::xxh3_64;

pub(crate) const DEFAULT_CAPACITY: usize = 500;

/// Diagnostics counters for a merger instance. Monotonically increasing;
/// they never affect merge results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Total calls to `merge`.
    pub merge_calls: u64,
    /// Calls answered from the cache.
    pub cache_hits: u64,
    /// Results stored into the cache.
    pub cache_stores: u64,
}

pub(crate) struct ResultCache {
    entries: FxHashMap<u64, String>,
    order: VecDeque<u64>,
    capacity: usize,
    pub(crate) stats: MergeStats,
}

impl ResultCache {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
            stats: MergeStats::default(),
        }
    }

    pub(crate) fn key(input: &str) -> u64 {
        xxh3_64(input.as_bytes())
    }

    pub(crate) fn get(&mut self, key: u64) -> Option<String> {
        let hit = self.entries.get(&key).cloned();
        if hit.is_some() {
            self.stats.cache_hits += 1;
            trace!(key, "merge cache hit");
        }
        hit
    }

    pub(crate) fn put(&mut self, key: u64, value: String) {
        if self.entries.len() >= self.capacity {
            self.evict_oldest_half();
        }
        if self.entries.insert(key, value).is_none() {
            self.order.push_back(key);
        }
        self.stats.cache_stores += 1;
        trace!(key, len = self.entries.len(), "merge cache store");
    }

    fn evict_oldest_half(&mut self) {
        let drop_count = (self.capacity / 2).max(1);
        for _ in 0..drop_count {
            match self.order.pop_front() {
                Some(key) => {
                    self.entries.remove(&key);
                }
                None => break,
            }
        }
        trace!(dropped = drop_count, "merge cache eviction");
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub(crate) fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.entries.len() > self.capacity {
            if let Some(key) = self.order.pop_front() {
                self.entries.remove(&key);
            } else {
                break;
            }
        }
    }

    pub(crate) fn reset_stats(&mut self) {
        self.stats = MergeStats::default();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn same_input_same_key() {
        assert_eq!(ResultCache::key("p-4 p-6"), ResultCache::key("p-4 p-6"));
        assert_ne!(ResultCache::key("p-4"), ResultCache::key("p-6"));
    }

    #[test]
    fn get_after_put_round_trips() {
        let mut cache = ResultCache::new(10);
        let key = ResultCache::key("p-4 p-6");
        assert_eq!(cache.get(key), None);
        cache.put(key, "p-6".to_string());
        assert_eq!(cache.get(key), Some("p-6".to_string()));
        assert_eq!(cache.stats.cache_hits, 1);
        assert_eq!(cache.stats.cache_stores, 1);
    }

    #[test]
    fn eviction_drops_the_oldest_half() {
        let mut cache = ResultCache::new(4);
        for i in 0u64..4 {
            cache.put(i, i.to_string());
        }
        assert_eq!(cache.len(), 4);
        // Inserting a fifth entry evicts the two oldest first.
        cache.put(4, "4".to_string());
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get(0), None);
        assert_eq!(cache.get(1), None);
        assert_eq!(cache.get(2), Some("2".to_string()));
        assert_eq!(cache.get(3), Some("3".to_string()));
        assert_eq!(cache.get(4), Some("4".to_string()));
    }

    #[test]
    fn shrinking_capacity_evicts_down() {
        let mut cache = ResultCache::new(8);
        for i in 0u64..8 {
            cache.put(i, i.to_string());
        }
        cache.set_capacity(3);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get(7), Some("7".to_string()));
        assert_eq!(cache.get(0), None);
    }

    #[test]
    fn clear_keeps_counters() {
        let mut cache = ResultCache::new(4);
        cache.put(1, "x".to_string());
        cache.get(1);
        cache.clear();
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.stats.cache_hits, 1);
        assert_eq!(cache.stats.cache_stores, 1);
        cache.reset_stats();
        assert_eq!(cache.stats, MergeStats::default());
    }

    #[test]
    fn capacity_is_clamped_to_one() {
        let mut cache = ResultCache::new(0);
        cache.put(1, "a".to_string());
        cache.put(2, "b".to_string());
        assert_eq!(cache.len(), 1);
    }
}
