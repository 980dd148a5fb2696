//! Cache Module
//!
//! Provides a shared in-memory TTL cache with a background reaper task.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::tasks::spawn_reaper_task;

// == Cache ==
/// Cloneable handle to the shared TTL cache.
///
/// `Cache::new` spawns the background reaper immediately; the task is
/// aborted when the last handle is dropped, or earlier via
/// [`Cache::shutdown`], so a discarded cache never leaks a running task.
#[derive(Clone)]
pub struct Cache {
    /// Thread-safe cache store, shared with the reaper task
    store: Arc<RwLock<CacheStore>>,
    /// Keeps the reaper alive for as long as any handle exists
    reaper: Arc<ReaperGuard>,
}

/// Aborts the reaper task when the last cache handle goes away.
struct ReaperGuard {
    handle: JoinHandle<()>,
}

impl Drop for ReaperGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl Cache {
    // == Constructor ==
    /// Creates a cache whose entries live for `interval`, and starts the
    /// background reaper sweeping at that same period.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Panics
    /// Panics if `interval` is zero.
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "cache interval must be positive");

        let store = Arc::new(RwLock::new(CacheStore::new(interval)));
        let handle = spawn_reaper_task(Arc::clone(&store), interval);

        Self {
            store,
            reaper: Arc::new(ReaperGuard { handle }),
        }
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key`, resetting its expiry clock.
    ///
    /// Accepts any key and value, including empty ones; cannot fail.
    pub async fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        let mut store = self.store.write().await;
        store.add(key.into(), value);
    }

    // == Get ==
    /// Returns the bytes last added for `key`, or `None` on a miss.
    ///
    /// A miss covers both never-added and already-reaped keys. No age check
    /// happens on read: a logically expired entry may still be returned for
    /// up to one full interval past its deadline, until the next sweep.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        // Read lock: the hit/miss counters are atomic, so concurrent
        // lookups proceed in parallel
        let store = self.store.read().await;
        store.get(key)
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == Length ==
    /// Returns the current number of live entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Shutdown ==
    /// Stops the background reaper.
    ///
    /// Stored entries stay readable afterwards; they just stop being swept.
    pub fn shutdown(&self) {
        self.reaper.handle.abort();
    }
}
