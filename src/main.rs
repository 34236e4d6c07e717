//! splat3 - command-line schedule lookup
//!
//! Resolves the rotation active at a point in time and prints it as JSON.
//!
//! Usage: `splat3 [match_type] [locale] [rfc3339_time]`

use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Utc};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use splatoon3ink_client::{
    CacheStore, Config, Locale, MatchType, PersistentCache, Splatoon3Client,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "warn" so the JSON output stays clean; override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "splatoon3ink_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);

    let match_type: MatchType = match args.next() {
        Some(arg) => arg.parse()?,
        None => MatchType::BankaraOpen,
    };
    let locale: Option<Locale> = match args.next() {
        Some(arg) => Some(arg.parse()?),
        None => None,
    };
    let at: DateTime<Utc> = match args.next() {
        Some(arg) => DateTime::parse_from_rfc3339(&arg)
            .map(|t| t.with_timezone(&Utc))
            .with_context(|| format!("invalid RFC 3339 time: {arg}"))?,
        None => Utc::now(),
    };

    let config = Config::from_env();
    let cache_dir = config.cache_dir.clone();
    let mut client = Splatoon3Client::with_config(config);

    if let Some(dir) = cache_dir {
        info!(dir = %dir.display(), "using persistent cache");
        let cache: Arc<dyn CacheStore> = Arc::new(PersistentCache::new(dir).await);
        client = client.with_cache(cache);
    }

    match client.get_schedule_for_time(at, match_type, locale).await? {
        Some(schedule) => println!("{}", serde_json::to_string_pretty(&schedule)?),
        None => println!("no active {match_type} schedule at {at}"),
    }

    Ok(())
}
