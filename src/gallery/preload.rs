//! Loaded-flag cache for adjacent-resource preloading.
//!
//! Whenever the current index changes, the gallery asks for the resources of
//! the current slide and its two neighbours. This cache remembers, per index,
//! whether a request is in flight, finished, or failed, so that:
//!
//! - the same resource is never requested twice while pending or loaded;
//! - the presentation can show a pending indicator until a slide is ready;
//! - a failed resource is retried the next time the user navigates to it.
//!
//! # Invariants
//!
//! - `Loaded` is terminal: no later event moves an index out of it.
//! - The cache only empties on [`PreloadCache::clear`], called on full remount.

use serde::Serialize;
use std::collections::BTreeMap;

/// Load status of one index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    /// Request issued, completion not seen yet.
    Requested,
    /// Resource is ready.
    Loaded,
    /// The last attempt failed; eligible for a new request.
    Failed,
}

/// Counters describing cache activity. The driver logs them after each `wait`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PreloadStats {
    /// Requests issued.
    pub requests: u64,
    /// Completions that moved an index to `Loaded`.
    pub loaded: u64,
    /// Failures reported by the loader.
    pub failures: u64,
    /// Completions for indices with no request on record (stale or duplicate).
    pub stale: u64,
}

/// Per-index load flags.
#[derive(Debug, Clone, Default)]
pub struct PreloadCache {
    status: BTreeMap<usize, LoadStatus>,
    stats: PreloadStats,
}

impl PreloadCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks every index in `window` that is neither loaded nor in flight as
    /// requested, and returns those indices in window order.
    pub fn request(&mut self, window: &[usize]) -> Vec<usize> {
        let mut issued = Vec::new();
        for &index in window {
            match self.status.get(&index) {
                Some(LoadStatus::Loaded | LoadStatus::Requested) => {}
                Some(LoadStatus::Failed) | None => {
                    self.status.insert(index, LoadStatus::Requested);
                    self.stats.requests += 1;
                    issued.push(index);
                }
            }
        }
        issued
    }

    /// Records a successful load. Returns `true` if the index was not already
    /// loaded.
    ///
    /// Completions without a matching request are still honored: the resource
    /// really is available, and the flag only ever moves towards loaded.
    pub fn mark_loaded(&mut self, index: usize) -> bool {
        match self.status.insert(index, LoadStatus::Loaded) {
            Some(LoadStatus::Loaded) => false,
            Some(LoadStatus::Requested | LoadStatus::Failed) => {
                self.stats.loaded += 1;
                true
            }
            None => {
                self.stats.stale += 1;
                self.stats.loaded += 1;
                true
            }
        }
    }

    /// Records a failed load. Loaded indices are left untouched.
    ///
    /// Returns `true` if the status changed.
    pub fn mark_failed(&mut self, index: usize) -> bool {
        self.stats.failures += 1;
        match self.status.get(&index) {
            Some(LoadStatus::Loaded | LoadStatus::Failed) => false,
            Some(LoadStatus::Requested) => {
                self.status.insert(index, LoadStatus::Failed);
                true
            }
            None => {
                self.stats.stale += 1;
                false
            }
        }
    }

    /// Whether the resource at `index` is ready.
    #[must_use]
    pub fn is_loaded(&self, index: usize) -> bool {
        self.status.get(&index) == Some(&LoadStatus::Loaded)
    }

    /// Status of `index`, `None` if it was never requested.
    #[must_use]
    pub fn status(&self, index: usize) -> Option<LoadStatus> {
        self.status.get(&index).copied()
    }

    /// Number of indices currently loaded.
    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.status
            .values()
            .filter(|status| **status == LoadStatus::Loaded)
            .count()
    }

    #[must_use]
    pub const fn stats(&self) -> PreloadStats {
        self.stats
    }

    /// Forgets every flag and counter.
    pub fn clear(&mut self) {
        self.status.clear();
        self.stats = PreloadStats::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_skips_pending_and_loaded() {
        let mut cache = PreloadCache::new();
        assert_eq!(cache.request(&[0, 1, 9]), vec![0, 1, 9]);
        cache.mark_loaded(1);
        assert_eq!(cache.request(&[1, 2, 0]), vec![2]);
        assert_eq!(cache.stats().requests, 4);
    }

    #[test]
    fn loaded_never_reverts() {
        let mut cache = PreloadCache::new();
        cache.request(&[3]);
        assert!(cache.mark_loaded(3));
        assert!(!cache.mark_failed(3));
        assert!(!cache.mark_loaded(3));
        assert!(cache.is_loaded(3));
        assert!(cache.request(&[3]).is_empty());
    }

    #[test]
    fn failed_index_is_requested_again() {
        let mut cache = PreloadCache::new();
        cache.request(&[4]);
        assert!(cache.mark_failed(4));
        assert_eq!(cache.status(4), Some(LoadStatus::Failed));
        assert!(!cache.is_loaded(4));
        assert_eq!(cache.request(&[4]), vec![4]);
        assert_eq!(cache.status(4), Some(LoadStatus::Requested));
    }

    #[test]
    fn stale_completions_are_harmless() {
        let mut cache = PreloadCache::new();
        assert!(!cache.mark_failed(7));
        assert_eq!(cache.status(7), None);
        assert!(cache.mark_loaded(8));
        assert!(cache.is_loaded(8));
        assert_eq!(cache.stats().stale, 2);
    }

    #[test]
    fn clear_forgets_everything() {
        let mut cache = PreloadCache::new();
        cache.request(&[0, 1]);
        cache.mark_loaded(0);
        cache.clear();
        assert_eq!(cache.loaded_count(), 0);
        assert_eq!(cache.status(1), None);
        assert_eq!(cache.stats(), PreloadStats::default());
    }
}
