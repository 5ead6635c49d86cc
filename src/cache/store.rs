//! Cache Store Module
//!
//! The unsynchronized key-value map behind [`Cache`](super::Cache). Callers
//! serialize access through the lock owned by the cache handle.

use std::collections::HashMap;

use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage of raw payloads stamped with their insertion time.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Put ==
    /// Inserts or replaces the entry under `key` with a fresh timestamp.
    pub fn put(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// No freshness check happens here; stale entries stay visible until
    /// the next reap removes them.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Reap ==
    /// Removes every entry inserted strictly before `cutoff`.
    ///
    /// Returns the number of entries removed.
    pub fn reap(&mut self, cutoff: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_older_than(cutoff));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_store_new() {
        let store = CacheStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_put_and_get() {
        let mut store = CacheStore::new();

        store.put("https://example.com".to_string(), b"testdata".to_vec());

        assert_eq!(store.get("https://example.com"), Some(b"testdata".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let store = CacheStore::new();
        assert!(store.get("nonexistent").is_none());
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new();

        store.put("key1".to_string(), b"value1".to_vec());
        store.put("key1".to_string(), b"value2".to_vec());

        assert_eq!(store.get("key1"), Some(b"value2".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_ignores_age() {
        let mut store = CacheStore::new();
        store.put("old".to_string(), b"value".to_vec());

        sleep(Duration::from_millis(20));

        // Lookups never expire anything on their own
        assert_eq!(store.get("old"), Some(b"value".to_vec()));
    }

    #[test]
    fn test_store_reap_removes_only_older_entries() {
        let mut store = CacheStore::new();

        store.put("old".to_string(), b"value1".to_vec());
        sleep(Duration::from_millis(20));
        let cutoff = Instant::now();
        store.put("new".to_string(), b"value2".to_vec());

        let removed = store.reap(cutoff);

        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert!(store.get("old").is_none());
        assert!(store.get("new").is_some());
    }

    #[test]
    fn test_store_reap_empty() {
        let mut store = CacheStore::new();
        assert_eq!(store.reap(Instant::now()), 0);
    }

    #[test]
    fn test_store_overwrite_refreshes_timestamp() {
        let mut store = CacheStore::new();

        store.put("key".to_string(), b"first".to_vec());
        sleep(Duration::from_millis(20));
        let cutoff = Instant::now();
        store.put("key".to_string(), b"second".to_vec());

        assert_eq!(store.reap(cutoff), 0);
        assert_eq!(store.get("key"), Some(b"second".to_vec()));
    }
}
