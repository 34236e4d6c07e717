//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::schedule::Locale;

/// Default upstream base URL
pub const DEFAULT_BASE_URL: &str = "https://splatoon3.ink/data";

/// Default client identifier sent as the User-Agent header
pub const DEFAULT_USER_AGENT: &str =
    concat!("splatoon3ink-client/", env!("CARGO_PKG_VERSION"));

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream base URL
    pub base_url: String,
    /// Client identifier sent as the User-Agent header
    pub user_agent: String,
    /// Locale used when a call supplies none
    pub default_locale: Locale,
    /// Directory for the persistent cache; None keeps caching in memory
    pub cache_dir: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SPLATOON3_BASE_URL` - Upstream base URL (default: splatoon3.ink/data)
    /// - `SPLATOON3_USER_AGENT` - Client identifier header value
    /// - `SPLATOON3_LOCALE` - Default locale tag (default: ja-JP)
    /// - `SPLATOON3_CACHE_DIR` - Persistent cache directory (default: unset)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("SPLATOON3_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            user_agent: env::var("SPLATOON3_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            default_locale: env::var("SPLATOON3_LOCALE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            cache_dir: env::var("SPLATOON3_CACHE_DIR").ok().map(PathBuf::from),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_locale: Locale::default(),
            cache_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.user_agent.starts_with("splatoon3ink-client/"));
        assert_eq!(config.default_locale, Locale::JaJp);
        assert!(config.cache_dir.is_none());
    }
}
