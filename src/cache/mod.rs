//! Cache Module
//!
//! Provides a concurrent in-memory byte cache whose entries are removed by a
//! background reaper once they are older than a fixed interval.

mod entry;
mod expiring;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use expiring::Cache;
pub use store::CacheStore;
