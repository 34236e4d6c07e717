//! Schedule Client
//!
//! Fetches the upstream schedule document and locale catalogs with
//! cache-backed memoization, and exposes the resolution entry point.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::header::USER_AGENT;
use serde_json::Value;
use tracing::{debug, info};

use crate::cache::{CacheStore, VolatileCache};
use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::schedule::{resolve_schedule, Locale, MatchType, ScheduleDocument, ScheduleInfo};

// == Cache Keys ==
const SCHEDULES_CACHE_KEY: &str = "splatoon3_schedules";

fn locale_cache_key(locale: Locale) -> String {
    format!("splatoon3_locale_{locale}")
}

// == Client ==
/// Client for the splatoon3.ink schedule API.
///
/// Wraps the HTTP transport with [`CacheStore`]-backed memoization of the
/// raw documents. Each cache slot holds a complete, atomically-replaced
/// document; resolved answers are never cached. Concurrent calls that miss
/// the same key fetch independently and the last writer wins — there is no
/// request coalescing.
pub struct Splatoon3Client {
    http: reqwest::Client,
    base_url: String,
    user_agent: String,
    default_locale: Locale,
    cache: Arc<dyn CacheStore>,
}

impl Splatoon3Client {
    // == Constructors ==
    /// Creates a client with default configuration and a fresh in-memory
    /// cache.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a client from explicit configuration, with a fresh
    /// in-memory cache. Use [`Splatoon3Client::with_cache`] to share or
    /// persist cached documents.
    pub fn with_config(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
            user_agent: config.user_agent,
            default_locale: config.default_locale,
            cache: Arc::new(VolatileCache::new()),
        }
    }

    /// Replaces the cache backend.
    pub fn with_cache(mut self, cache: Arc<dyn CacheStore>) -> Self {
        self.cache = cache;
        self
    }

    /// Replaces the client identifier sent as the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Replaces the locale used when a call supplies none.
    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = locale;
        self
    }

    // == Fetch Schedules ==
    /// Returns the schedule document, from cache or upstream.
    ///
    /// On a cache miss issues a single GET to `<base>/schedules.json`; a
    /// non-success status is a fatal [`ClientError::Fetch`] for this call.
    /// The raw body is cached before validation, so a later call
    /// revalidates the same bytes rather than refetching.
    pub async fn fetch_schedules(&self) -> Result<ScheduleDocument> {
        let raw = self.fetch_json(SCHEDULES_CACHE_KEY, "schedules.json").await?;
        serde_json::from_value(raw).map_err(|e| ClientError::MalformedDocument(e.to_string()))
    }

    // == Fetch Locale ==
    /// Returns the locale catalog for `locale`, from cache or upstream,
    /// falling back to the configured default locale.
    pub async fn fetch_locale(&self, locale: Option<Locale>) -> Result<Value> {
        let locale = locale.unwrap_or(self.default_locale);
        self.fetch_json(&locale_cache_key(locale), &format!("locale/{locale}.json"))
            .await
    }

    /// Cache-through GET of one upstream JSON document.
    async fn fetch_json(&self, cache_key: &str, path: &str) -> Result<Value> {
        if let Some(cached) = self.cache.get(cache_key).await {
            debug!(key = cache_key, "serving document from cache");
            return Ok(cached);
        }

        let url = format!("{}/{}", self.base_url, path);
        info!(%url, "fetching upstream document");

        let response = self
            .http
            .get(&url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Fetch {
                status: status.as_u16(),
            });
        }

        let raw: Value = response.json().await?;
        self.cache.set(cache_key, raw.clone(), None).await;

        Ok(raw)
    }

    // == Resolve ==
    /// Resolves the rotation active at `at` for `match_type`.
    ///
    /// Fetches the schedule document and the locale catalog concurrently,
    /// joins both, then selects and localizes.
    ///
    /// The result distinguishes the three outcomes: `Ok(Some)` when a
    /// window is active, `Ok(None)` when no window covers `at` (or the
    /// matched node carries no usable setting), and `Err` when a fetch
    /// failed or the document was malformed.
    pub async fn get_schedule_for_time(
        &self,
        at: DateTime<Utc>,
        match_type: MatchType,
        locale: Option<Locale>,
    ) -> Result<Option<ScheduleInfo>> {
        let (doc, catalog) = tokio::join!(self.fetch_schedules(), self.fetch_locale(locale));
        let doc = doc?;
        let catalog = catalog?;

        Ok(resolve_schedule(&doc, &catalog, at, match_type))
    }
}

impl Default for Splatoon3Client {
    fn default() -> Self {
        Self::new()
    }
}
