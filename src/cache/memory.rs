//! In-Memory Cache Backend
//!
//! Process-lifetime cache backed by a HashMap. Expired entries are removed
//! lazily when a read observes them.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStore};

// == Volatile Cache ==
/// In-memory [`CacheStore`] backend.
///
/// Holds entries for the lifetime of the process. Pure map operations, so
/// none of the trait methods can fail. Construct one explicitly and share
/// it via `Arc` — there is no hidden process-wide instance.
#[derive(Debug, Default)]
pub struct VolatileCache {
    entries: RwLock<HashMap<String, CacheEntry<Value>>>,
}

impl VolatileCache {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current number of entries, including not-yet-reaped
    /// stale ones.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl CacheStore for VolatileCache {
    async fn get(&self, key: &str) -> Option<Value> {
        let mut entries = self.entries.write().await;

        let entry = entries.get(key)?;
        if entry.is_expired() {
            // Stale hit reads as a miss and reaps the entry
            entries.remove(key);
            debug!(key, "cache entry expired");
            return None;
        }

        Some(entry.data.clone())
    }

    async fn set(&self, key: &str, value: Value, ttl: Option<Duration>) {
        let entry = CacheEntry::new(value, ttl);
        self.entries.write().await.insert(key.to_string(), entry);
    }

    async fn delete(&self, key: &str) {
        self.entries.write().await.remove(key);
    }
}
