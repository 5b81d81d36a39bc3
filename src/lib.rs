//! Tailwind CSS class merging.
//!
//! Given an ordered list of utility classes that may contain duplicates
//! and semantic overlaps (`p-4 p-6`, `bg-red-500 bg-[#ff0000]`), produce
//! a single class string where only the winning class per semantic group
//! survives, preserving the relative order of survivors. Later
//! declarations win within a group, and shorthands like `p-8` suppress
//! earlier narrower siblings like `pt-4` under the same modifier scope.
//!
//! Classes the engine doesn't recognize pass through unchanged, and no
//! input ever produces an error: merging is a total function over strings.
//!
//! ```
//! use tw_merge::tw_merge;
//!
//! assert_eq!(tw_merge("p-4 p-6"), "p-6");
//! assert_eq!(tw_merge("pt-4 pr-4 pb-4 pl-4 p-8"), "p-8");
//! assert_eq!(tw_merge("hover:p-4 p-8"), "hover:p-4 p-8");
//! ```
//!
//! [`TwMerge`] adds a bounded result cache for callers that merge the
//! same component class lists over and over:
//!
//! ```
//! use tw_merge::TwMerge;
//!
//! let merger = TwMerge::new();
//! let merged = merger.merge(vec!["px-2 py-1 bg-sky-500", "p-3"]);
//! assert_eq!(merged, "bg-sky-500 p-3");
//! ```

mod arbitrary;
mod cache;
mod class_list;
mod groups;
mod merge;
mod parse;


pub use cache::MergeStats;
pub use class_list::ClassList;

use cache::{DEFAULT_CAPACITY, ResultCache};
use parking_lot::Mutex;

/// Merge a class string without caching.
pub fn tw_merge(input: &str) -> String {
    merge::merge_classes(input)
}

/// A class merger with a bounded, instance-scoped result cache.
///
/// Repeated identical inputs are answered from the cache with
/// byte-identical output. The cache sits behind a mutex, so one instance
/// can be shared across threads.
pub struct TwMerge {
    cache: Mutex<ResultCache>,
}

impl TwMerge {
    pub fn new() -> Self {
        Self::with_cache_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_cache_capacity(capacity: usize) -> Self {
        Self {
            cache: Mutex::new(ResultCache::new(capacity)),
        }
    }

    /// Merge a class list. Accepts a plain string or arbitrarily nested
    /// lists of strings, flattened depth-first before processing. Blank
    /// input yields an empty string.
    pub fn merge(&self, classes: impl Into<ClassList>) -> String {
        let input = classes.into().flatten();

        let mut cache = self.cache.lock();
        cache.stats.merge_calls += 1;

        if input.trim().is_empty() {
            return String::new();
        }

        let key = ResultCache::key(&input);
        if let Some(hit) = cache.get(key) {
            return hit;
        }

        let result = merge::merge_classes(&input);
        cache.put(key, result.clone());
        result
    }

    /// Drop all cached results. Counters are unaffected.
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }

    /// Change the cache capacity, evicting oldest entries if the cache
    /// currently holds more. Capacities below 1 are clamped to 1.
    pub fn set_cache_capacity(&self, capacity: usize) {
        self.cache.lock().set_capacity(capacity);
    }

    /// Snapshot of the diagnostics counters.
    pub fn stats(&self) -> MergeStats {
        self.cache.lock().stats
    }

    /// Zero the diagnostics counters. Cached entries are unaffected.
    pub fn reset_stats(&self) {
        self.cache.lock().reset_stats();
    }
}

impl Default for TwMerge {
    fn default() -> Self {
        Self::new()
    }
}
