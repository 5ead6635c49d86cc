//! Cache Entry Module
//!
//! Defines a single stored payload together with its insertion time.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A raw response payload stamped with the moment it was inserted.
///
/// Entries are never mutated; a second insert under the same key replaces
/// the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bytes
    pub value: Vec<u8>,
    /// Insertion instant
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how long ago the entry was inserted.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Older Than ==
    /// Checks whether the entry was inserted strictly before `cutoff`.
    ///
    /// An entry created exactly at the cutoff is kept.
    pub fn is_older_than(&self, cutoff: Instant) -> bool {
        self.created_at < cutoff
    }
}
