//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached value stamped with its insertion time.
///
/// Entries are never mutated in place; overwriting a key replaces the whole
/// entry, which resets its age to zero.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bytes (opaque payload, never parsed by the cache)
    pub value: Vec<u8>,
    /// Instant the entry was inserted
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry holding `value`, stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed since the entry was inserted.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl`.
    ///
    /// Boundary condition: an entry is expired once `age >= ttl`, so an entry
    /// whose age equals the TTL exactly is already eligible for reaping.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() >= ttl
    }
}
