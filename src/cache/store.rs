//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with TTL-based reaping.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// In-memory byte cache keyed by string, with a fixed TTL.
///
/// The store holds the map, the TTL, and the statistics together so there is
/// no free-floating global state; callers share it behind a lock.
///
/// Expiry policy: `get` does not age-check. An entry is returned as long as
/// it is present in the live map; removal is the background reaper's job
/// (plus overwrite via `add`). Worst-case staleness is therefore one full
/// TTL interval past actual expiry.
///
/// The hit/miss counters are atomics so `get` works through a shared
/// reference; lookups never need the exclusive lock.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Time-to-live, also used as the reaper's sweep period
    ttl: Duration,
    /// Number of successful lookups
    hits: AtomicU64,
    /// Number of failed lookups
    misses: AtomicU64,
    /// Number of entries removed by the reaper
    reaped: AtomicU64,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new empty CacheStore with the given TTL.
    ///
    /// # Arguments
    /// * `ttl` - How long an entry may live before the reaper removes it
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            reaped: AtomicU64::new(0),
        }
    }

    // == Add ==
    /// Stores a key-value pair, stamping it with the current time.
    ///
    /// If the key already exists the entry is fully replaced, which resets
    /// its expiry clock. Any key and value are accepted, including empty
    /// ones; this operation cannot fail.
    ///
    /// # Arguments
    /// * `key` - The key to store under
    /// * `value` - The raw bytes to store
    pub fn add(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Retrieves the bytes stored for `key`, or `None` if the key was never
    /// added or has since been reaped.
    ///
    /// Absence does not distinguish "never added" from "expired"; callers
    /// treat any miss as license to fetch fresh data. Takes `&self`, so
    /// concurrent readers proceed in parallel.
    ///
    /// # Arguments
    /// * `key` - The key to look up
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry.value.clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    // == Reap ==
    /// Removes every entry whose age has reached the TTL.
    ///
    /// Returns the number of entries removed. Younger entries are never
    /// touched.
    pub fn reap(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(self.ttl))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        self.reaped.fetch_add(count as u64, Ordering::Relaxed);
        count
    }

    // == TTL ==
    /// Returns the configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Stats ==
    /// Returns a snapshot of the current cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            reaped: self.reaped.load(Ordering::Relaxed),
            total_entries: self.entries.len(),
        }
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(Duration::from_secs(5));
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.ttl(), Duration::from_secs(5));
    }

    #[test]
    fn test_store_add_and_get() {
        let mut store = CacheStore::new(Duration::from_secs(5));

        store.add("key1".to_string(), b"value1".to_vec());
        let value = store.get("key1");

        assert_eq!(value, Some(b"value1".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let store = CacheStore::new(Duration::from_secs(5));

        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_store_get_through_shared_reference() {
        let mut store = CacheStore::new(Duration::from_secs(5));
        store.add("key1".to_string(), b"value1".to_vec());

        // Lookups go through &self and still record statistics
        let shared = &store;
        assert_eq!(shared.get("key1"), Some(b"value1".to_vec()));
        assert_eq!(shared.get("missing"), None);

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_store_empty_key_and_value() {
        let mut store = CacheStore::new(Duration::from_secs(5));

        store.add(String::new(), Vec::new());

        assert_eq!(store.get(""), Some(Vec::new()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new(Duration::from_secs(5));

        store.add("key1".to_string(), b"value1".to_vec());
        store.add("key1".to_string(), b"value2".to_vec());

        assert_eq!(store.get("key1"), Some(b"value2".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite_resets_age() {
        let mut store = CacheStore::new(Duration::from_millis(100));

        store.add("key1".to_string(), b"value1".to_vec());
        sleep(Duration::from_millis(60));

        // Re-adding replaces the timestamp, so the entry survives the sweep
        // that would have removed the original
        store.add("key1".to_string(), b"value2".to_vec());
        sleep(Duration::from_millis(60));

        assert_eq!(store.reap(), 0);
        assert_eq!(store.get("key1"), Some(b"value2".to_vec()));
    }

    #[test]
    fn test_store_multiple_entries() {
        let mut store = CacheStore::new(Duration::from_secs(5));

        store.add("key1".to_string(), b"value1".to_vec());
        store.add("key2".to_string(), b"value2".to_vec());
        store.add("key3".to_string(), b"value3".to_vec());

        assert_eq!(store.get("key1"), Some(b"value1".to_vec()));
        assert_eq!(store.get("key2"), Some(b"value2".to_vec()));
        assert_eq!(store.get("key3"), Some(b"value3".to_vec()));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_store_reap_removes_expired() {
        let mut store = CacheStore::new(Duration::from_millis(20));

        store.add("key1".to_string(), b"value1".to_vec());

        sleep(Duration::from_millis(40));

        let removed = store.reap();
        assert_eq!(removed, 1);
        assert!(store.is_empty());
        assert_eq!(store.get("key1"), None);
    }

    #[test]
    fn test_store_reap_preserves_young_entries() {
        let mut store = CacheStore::new(Duration::from_millis(100));

        store.add("old".to_string(), b"old_value".to_vec());
        sleep(Duration::from_millis(120));
        store.add("young".to_string(), b"young_value".to_vec());

        let removed = store.reap();
        assert_eq!(removed, 1);
        assert_eq!(store.get("old"), None);
        assert_eq!(store.get("young"), Some(b"young_value".to_vec()));
    }

    #[test]
    fn test_store_get_does_not_age_check() {
        let mut store = CacheStore::new(Duration::from_millis(20));

        store.add("key1".to_string(), b"value1".to_vec());
        sleep(Duration::from_millis(40));

        // Expired but not yet reaped: still served from the live map
        assert_eq!(store.get("key1"), Some(b"value1".to_vec()));
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new(Duration::from_secs(5));

        store.add("key1".to_string(), b"value1".to_vec());
        let _ = store.get("key1"); // hit
        let _ = store.get("nonexistent"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_store_stats_count_reaped() {
        let mut store = CacheStore::new(Duration::from_millis(20));

        store.add("key1".to_string(), b"value1".to_vec());
        store.add("key2".to_string(), b"value2".to_vec());
        sleep(Duration::from_millis(40));

        store.reap();

        let stats = store.stats();
        assert_eq!(stats.reaped, 2);
        assert_eq!(stats.total_entries, 0);
    }
}
