//! Expiring Cache Module
//!
//! Thread-safe handle over a [`CacheStore`] that owns the background reaper
//! removing entries older than the configured interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::CacheStore;
use crate::tasks::spawn_reaper_task;

// == Cache ==
/// A concurrent byte cache keyed by request identity.
///
/// The interval given at construction is both the freshness window of every
/// entry and the period of the reaper. An entry therefore lives between one
/// and two intervals, depending on where it falls relative to the sweeps.
///
/// Lookups never check freshness themselves; the reaper is the only thing
/// that expires entries. Dropping the cache stops the reaper.
#[derive(Debug)]
pub struct Cache {
    /// Shared storage, also held by the reaper
    store: Arc<RwLock<CacheStore>>,
    /// TTL and reaper period
    interval: Duration,
    /// Background reaper
    reaper: JoinHandle<()>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// A zero interval makes the reaper sweep back-to-back, so every entry
    /// disappears almost immediately.
    ///
    /// # Panics
    /// Panics when called outside of a Tokio runtime.
    pub fn new(interval: Duration) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new()));
        let reaper = spawn_reaper_task(store.clone(), interval);

        Self {
            store,
            interval,
            reaper,
        }
    }

    // == Put ==
    /// Inserts or replaces the value stored under `key`.
    pub async fn put(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        debug!(key = %key, "cache put");
        self.store.write().await.put(key, value.into());
    }

    // == Get ==
    /// Returns the value stored under `key`, if the reaper has not removed it.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.read().await.get(key)
    }

    // == Length ==
    /// Returns the number of entries currently held.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Interval ==
    /// Returns the TTL shared by every entry, which is also the reap period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Shutdown ==
    /// Stops the reaper. Entries stay readable but no longer expire.
    ///
    /// Calling this more than once is harmless.
    pub fn shutdown(&self) {
        self.reaper.abort();
    }

    // == Is Reaping ==
    /// Returns true while the reaper task is still running.
    pub fn is_reaping(&self) -> bool {
        !self.reaper.is_finished()
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        self.reaper.abort();
    }
}
