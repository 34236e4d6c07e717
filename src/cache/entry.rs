//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::cache::DEFAULT_TTL;

// == Cache Entry ==
/// A single cached value with its creation timestamp.
///
/// Entries are immutable once written: `set` replaces them wholesale,
/// expiry is evaluated lazily on read. The persistent backend serializes
/// this struct verbatim as the per-key file content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// Creation timestamp (Unix milliseconds)
    pub timestamp: u64,
    /// Per-entry TTL override in milliseconds, None = default TTL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl_ms: Option<u64>,
    /// The stored value
    pub data: T,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new entry timestamped now, with an optional TTL override.
    pub fn new(data: T, ttl: Option<Duration>) -> Self {
        Self {
            timestamp: current_timestamp_ms(),
            ttl_ms: ttl.map(|d| d.as_millis() as u64),
            data,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived its TTL.
    ///
    /// An entry is valid while `now - timestamp < ttl`; once the full TTL
    /// has elapsed the entry is expired. Without an override the fixed
    /// one-hour default governs.
    pub fn is_expired(&self) -> bool {
        let ttl_ms = self
            .ttl_ms
            .unwrap_or_else(|| DEFAULT_TTL.as_millis() as u64);
        current_timestamp_ms().saturating_sub(self.timestamp) >= ttl_ms
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_fresh_is_not_expired() {
        let entry = CacheEntry::new("value".to_string(), None);
        assert!(!entry.is_expired());
        assert!(entry.ttl_ms.is_none());
    }

    #[test]
    fn test_entry_expires_after_override() {
        let entry = CacheEntry::new("value".to_string(), Some(Duration::from_millis(30)));

        assert!(!entry.is_expired());
        sleep(Duration::from_millis(60));
        assert!(entry.is_expired());
    }

    #[test]
    fn test_entry_expiration_boundary() {
        // Backdate the timestamp so exactly one TTL has elapsed
        let ttl = Duration::from_secs(10);
        let entry = CacheEntry {
            timestamp: current_timestamp_ms() - ttl.as_millis() as u64,
            ttl_ms: Some(ttl.as_millis() as u64),
            data: "value".to_string(),
        };

        assert!(entry.is_expired(), "entry at exactly TTL age is stale");
    }

    #[test]
    fn test_entry_default_ttl_governs_without_override() {
        // Just under an hour old: still valid under the default TTL
        let entry = CacheEntry {
            timestamp: current_timestamp_ms() - (DEFAULT_TTL.as_millis() as u64 - 5_000),
            ttl_ms: None,
            data: "value".to_string(),
        };
        assert!(!entry.is_expired());

        // Just over an hour old: stale
        let entry = CacheEntry {
            timestamp: current_timestamp_ms() - (DEFAULT_TTL.as_millis() as u64 + 5_000),
            ttl_ms: None,
            data: "value".to_string(),
        };
        assert!(entry.is_expired());
    }

    #[test]
    fn test_entry_serde_roundtrip() {
        let entry = CacheEntry::new(serde_json::json!({"a": 1}), None);
        let text = serde_json::to_string(&entry).unwrap();

        // No override means the ttl field is omitted from the file format
        assert!(!text.contains("ttl_ms"));

        let back: CacheEntry<serde_json::Value> = serde_json::from_str(&text).unwrap();
        assert_eq!(back.timestamp, entry.timestamp);
        assert_eq!(back.data, entry.data);
    }
}
