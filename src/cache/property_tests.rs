//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the storage contract of the cache.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{Cache, CacheStore};

// == Test Configuration ==
const TEST_INTERVAL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates request-like keys
fn key_strategy() -> impl Strategy<Value = String> {
    "https://[a-z]{1,12}\\.example/[a-z0-9/_-]{0,32}".prop_map(|s| s)
}

/// Generates arbitrary payloads, including empty ones
fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..512)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: Vec<u8> },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a pair and reading it back returns the exact bytes stored.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let rt = runtime();
        let retrieved = rt.block_on(async {
            let cache = Cache::new(TEST_INTERVAL);
            cache.put(key.clone(), value.clone()).await;
            cache.get(&key).await
        });

        prop_assert_eq!(retrieved, Some(value));
    }

    // The second of two writes to the same key is the one observed.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let rt = runtime();
        let (retrieved, len) = rt.block_on(async {
            let cache = Cache::new(TEST_INTERVAL);
            cache.put(key.clone(), value1).await;
            cache.put(key.clone(), value2.clone()).await;
            (cache.get(&key).await, cache.len().await)
        });

        prop_assert_eq!(retrieved, Some(value2));
        prop_assert_eq!(len, 1);
    }

    // Before any reap, the store behaves exactly like a plain map.
    #[test]
    fn prop_store_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new();
        let mut model: HashMap<String, Vec<u8>> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    store.put(key.clone(), value.clone());
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(store.get(&key), model.get(&key).cloned());
                }
            }
        }

        prop_assert_eq!(store.len(), model.len());
    }
}
