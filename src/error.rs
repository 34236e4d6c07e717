//! Error types for the schedule client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Client Error Enum ==
/// Unified error type for the schedule client.
///
/// Cache storage faults are deliberately absent: both cache backends
/// downgrade I/O failures to misses or no-ops and log a warning, so
/// callers never observe them.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Upstream returned a non-success status
    #[error("upstream request failed with status {status}")]
    Fetch { status: u16 },

    /// Transport-level HTTP failure (connection, timeout, body decode)
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Schedule document is missing the expected shape
    #[error("malformed schedule document: {0}")]
    MalformedDocument(String),

    /// String did not name a known match type
    #[error("unknown match type: {0}")]
    InvalidMatchType(String),

    /// String did not name a supported locale
    #[error("unknown locale: {0}")]
    InvalidLocale(String),
}

// == Result Type Alias ==
/// Convenience Result type for the schedule client.
pub type Result<T> = std::result::Result<T, ClientError>;
