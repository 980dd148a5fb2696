//! TTL Reaper Task
//!
//! Background task that periodically removes cache entries older than the
//! configured interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the background task that sweeps expired cache entries.
///
/// The task sleeps for `interval` between sweeps, then takes the write lock
/// just long enough to remove every entry whose age has reached the TTL.
/// Entries are therefore never gone before their deadline, and gone at most
/// one interval after it.
///
/// # Arguments
/// * `store` - Shared reference to the cache store
/// * `interval` - Sleep period between sweeps (same duration as the TTL)
///
/// # Returns
/// A JoinHandle for the spawned task; aborting it stops the sweep cleanly
/// at the next wake.
pub fn spawn_reaper_task(store: Arc<RwLock<CacheStore>>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("starting cache reaper, sweeping every {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            // Hold the write lock only for the sweep itself
            let removed = {
                let mut store = store.write().await;
                store.reap()
            };

            if removed > 0 {
                info!("reaper: removed {} expired entries", removed);
            } else {
                debug!("reaper: no expired entries found");
            }
        }
    })
}
