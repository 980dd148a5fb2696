//! Cache Statistics Module
//!
//! Snapshot of cache performance metrics: hits, misses, and reaped entries.
//! The live counters are atomics inside the store; this type is the copy
//! handed out to callers.

// == Cache Stats ==
/// A point-in-time snapshot of cache performance metrics.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not present)
    pub misses: u64,
    /// Number of entries removed by the background reaper
    pub reaped: u64,
    /// Number of entries in the cache when the snapshot was taken
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
