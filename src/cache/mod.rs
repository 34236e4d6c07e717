//! Cache Module
//!
//! TTL-bounded memoization for fetched documents, with two interchangeable
//! backends: an in-memory map and a one-file-per-key persistent store.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

mod entry;
mod file;
mod memory;


// Re-export public types
pub use entry::CacheEntry;
pub use file::PersistentCache;
pub use memory::VolatileCache;

// == Public Constants ==
/// Default time-to-live for cache entries
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

// == Cache Store Trait ==
/// Keyed storage with expiry semantics.
///
/// Both backends satisfy the same contract:
/// - `get` returns the value only while its age is below the TTL; a stale
///   hit removes the entry and reads as a miss.
/// - `set` replaces any prior entry wholesale, timestamped now. The TTL
///   override applies to that entry only; `None` uses [`DEFAULT_TTL`].
/// - `delete` is idempotent.
///
/// Storage faults never surface: backends log a warning and degrade to a
/// miss on read or a no-op on write and delete.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the stored value for `key` if present and unexpired.
    async fn get(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key`, replacing any prior entry.
    async fn set(&self, key: &str, value: Value, ttl: Option<Duration>);

    /// Removes the entry for `key` if present.
    async fn delete(&self, key: &str);
}
