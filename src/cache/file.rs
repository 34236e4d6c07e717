//! Persistent Cache Backend
//!
//! One JSON file per key on durable storage. Storage faults are never
//! fatal: reads degrade to misses, writes and deletes to no-ops, each with
//! a warning log.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tracing::{debug, warn};

use crate::cache::{CacheEntry, CacheStore};

// == Persistent Cache ==
/// File-backed [`CacheStore`] backend.
///
/// Each key maps to `<dir>/<key>.json` holding the serialized
/// [`CacheEntry`]. Keys are assumed filesystem-safe. Concurrent writers
/// racing on the same key file are not serialized; the last writer's file
/// content survives.
#[derive(Debug)]
pub struct PersistentCache {
    cache_dir: PathBuf,
}

impl PersistentCache {
    // == Constructor ==
    /// Creates a cache rooted at `cache_dir`, creating the directory
    /// recursively if it does not exist.
    pub async fn new(cache_dir: impl Into<PathBuf>) -> Self {
        let cache_dir = cache_dir.into();
        if let Err(err) = fs::create_dir_all(&cache_dir).await {
            warn!(dir = %cache_dir.display(), %err, "failed to create cache directory");
        }
        Self { cache_dir }
    }

    /// Returns the backing directory.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{key}.json"))
    }

    async fn remove_file(&self, path: &Path) {
        if let Err(err) = fs::remove_file(path).await {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!(file = %path.display(), %err, "failed to remove cache file");
            }
        }
    }
}

#[async_trait]
impl CacheStore for PersistentCache {
    async fn get(&self, key: &str) -> Option<Value> {
        let path = self.file_path(key);

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!(key, %err, "failed to read cache file");
                }
                return None;
            }
        };

        let entry: CacheEntry<Value> = match serde_json::from_slice(&bytes) {
            Ok(entry) => entry,
            Err(err) => {
                // Corrupt file reads as a miss and is discarded
                warn!(key, %err, "discarding corrupt cache file");
                self.remove_file(&path).await;
                return None;
            }
        };

        if entry.is_expired() {
            debug!(key, "cache file expired");
            self.remove_file(&path).await;
            return None;
        }

        Some(entry.data)
    }

    async fn set(&self, key: &str, value: Value, ttl: Option<Duration>) {
        let entry = CacheEntry::new(value, ttl);
        let bytes = match serde_json::to_vec_pretty(&entry) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(key, %err, "failed to serialize cache entry");
                return;
            }
        };

        if let Err(err) = fs::write(self.file_path(key), bytes).await {
            warn!(key, %err, "failed to write cache file");
        }
    }

    async fn delete(&self, key: &str) {
        self.remove_file(&self.file_path(key)).await;
    }
}
