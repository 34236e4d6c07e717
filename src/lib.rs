//! Splatoon3.ink API client
//!
//! Fetches rotating schedule data from splatoon3.ink, caches the raw
//! documents with a one-hour TTL, and resolves the rotation active at a
//! given instant into localized rule and stage names.
//!
//! ```no_run
//! use chrono::Utc;
//! use splatoon3ink_client::{MatchType, Splatoon3Client};
//!
//! # async fn run() -> splatoon3ink_client::Result<()> {
//! let client = Splatoon3Client::new();
//! if let Some(info) = client
//!     .get_schedule_for_time(Utc::now(), MatchType::BankaraOpen, None)
//!     .await?
//! {
//!     println!("{} on {} / {}", info.rule, info.stages[0], info.stages[1]);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod schedule;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::error;

pub use cache::{CacheEntry, CacheStore, PersistentCache, VolatileCache, DEFAULT_TTL};
pub use client::Splatoon3Client;
pub use config::Config;
pub use error::{ClientError, Result};
pub use schedule::{Locale, MatchType, ScheduleInfo};

// == Convenience Function ==
/// One-shot schedule lookup with a throwaway client.
///
/// Builds a default client (or one over `cache` when supplied), resolves,
/// and collapses every failure into the absence signal after logging it.
/// Use [`Splatoon3Client::get_schedule_for_time`] directly when the caller
/// needs to distinguish "no active window" from "could not determine".
pub async fn get_schedule(
    at: DateTime<Utc>,
    match_type: MatchType,
    cache: Option<Arc<dyn CacheStore>>,
    locale: Option<Locale>,
) -> Option<ScheduleInfo> {
    let mut client = Splatoon3Client::new();
    if let Some(cache) = cache {
        client = client.with_cache(cache);
    }

    match client.get_schedule_for_time(at, match_type, locale).await {
        Ok(info) => info,
        Err(err) => {
            error!(%err, "schedule lookup failed");
            None
        }
    }
}
