//! Cache Reaper Task
//!
//! Background task that periodically removes cache entries older than the
//! cache interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically reaps stale cache entries.
///
/// Every `interval` the task takes the write lock once and removes every
/// entry created strictly before `now - interval`. The whole sweep happens
/// under that single guard with no await point inside, so aborting the task
/// can only stop it between sweeps.
///
/// A zero interval sweeps back-to-back, yielding to the scheduler between
/// passes.
///
/// # Arguments
/// * `store` - Shared store, also held by the owning cache
/// * `interval` - Reap period and maximum entry age
///
/// # Returns
/// A JoinHandle for the spawned task, used by the cache to abort it.
pub fn spawn_reaper_task(store: Arc<RwLock<CacheStore>>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(?interval, "Starting cache reaper");

        loop {
            if interval.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(interval).await;
            }

            // Early in the process lifetime there may be no instant that far back
            let Some(cutoff) = Instant::now().checked_sub(interval) else {
                continue;
            };

            let removed = store.write().await.reap(cutoff);

            if removed > 0 {
                info!("Cache reap: removed {} stale entries", removed);
            } else {
                debug!("Cache reap: no stale entries found");
            }
        }
    })
}
