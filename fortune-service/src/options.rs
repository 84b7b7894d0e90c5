//! Configuration options for the fortune service.
//!
//! Options are layered: built-in defaults, then `~/.fortune/config.toml` if
//! present, then environment variables. Front ends apply their own flags on
//! top of the result.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use crate::Result;

/// Default horoscope API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://horoscope-api.vercel.app/api";

/// Day requested from the API
pub const DEFAULT_DAY: &str = "today";

/// Hard request deadline: 8 seconds
pub const DEFAULT_TIMEOUT_MS: u64 = 8_000;

/// Cache lifetime: 6 hours
pub const DEFAULT_CACHE_TTL_MS: u64 = 6 * 60 * 60 * 1000;

/// Overrides the API endpoint
pub const ENV_API_URL: &str = "FORTUNE_API_URL";

/// Overrides the cache directory
pub const ENV_CACHE_DIR: &str = "FORTUNE_CACHE_DIR";

/// Settings for fetching and caching horoscopes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceOptions {
    /// API base URL, without query string
    pub endpoint: String,

    /// Value sent as the `day` query parameter
    pub day: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,

    /// How long cached fortunes stay valid, in milliseconds
    pub cache_ttl_ms: u64,

    /// Where cache files live; defaults to `~/.fortune/cache`
    pub cache_dir: Option<PathBuf>,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            day: DEFAULT_DAY.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            cache_ttl_ms: DEFAULT_CACHE_TTL_MS,
            cache_dir: None,
        }
    }
}

impl ServiceOptions {
    /// Load options from the config file and the process environment.
    pub fn load() -> Result<Self> {
        let options = match Self::config_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "loading config file");
                Self::from_toml_str(&fs::read_to_string(&path)?)?
            }
            _ => Self::default(),
        };

        Ok(options.with_env(|key| std::env::var(key).ok()))
    }

    /// Parse options from TOML; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let options: ServiceOptions = toml::from_str(text)?;
        Ok(options.normalized())
    }

    /// Apply environment overrides read through `lookup`.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.endpoint = url;
        }
        if let Some(dir) = lookup(ENV_CACHE_DIR).filter(|v| !v.trim().is_empty()) {
            self.cache_dir = Some(PathBuf::from(dir));
        }
        self.normalized()
    }

    /// `~/.fortune/config.toml`
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".fortune").join("config.toml"))
    }

    /// Cache directory, falling back to `~/.fortune/cache`.
    pub fn resolved_cache_dir(&self) -> Option<PathBuf> {
        self.cache_dir
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(".fortune").join("cache")))
    }

    fn normalized(mut self) -> Self {
        // Remove trailing slash if present
        let trimmed = self.endpoint.trim().trim_end_matches('/');
        self.endpoint = trimmed.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_behavior() {
        let options = ServiceOptions::default();
        assert_eq!(options.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(options.timeout_ms, 8000);
        assert_eq!(options.cache_ttl_ms, 21_600_000);
    }

    #[test]
    fn toml_overrides_only_given_keys() {
        let options = ServiceOptions::from_toml_str(
            r#"
            endpoint = "http://localhost:9000/api/"
            timeout_ms = 2500
            "#,
        )
        .unwrap();

        assert_eq!(options.endpoint, "http://localhost:9000/api");
        assert_eq!(options.timeout_ms, 2500);
        assert_eq!(options.day, DEFAULT_DAY);
        assert_eq!(options.cache_ttl_ms, DEFAULT_CACHE_TTL_MS);
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(ServiceOptions::from_toml_str("timeout_ms = \"soon\"").is_err());
    }

    #[test]
    fn environment_wins_over_file() {
        let options = ServiceOptions::default().with_env(|key| match key {
            ENV_API_URL => Some("http://env.test/api".into()),
            ENV_CACHE_DIR => Some("/tmp/fortune-cache".into()),
            _ => None,
        });

        assert_eq!(options.endpoint, "http://env.test/api");
        assert_eq!(options.resolved_cache_dir(), Some(PathBuf::from("/tmp/fortune-cache")));
    }

    #[test]
    fn blank_environment_values_are_ignored() {
        let options = ServiceOptions::default().with_env(|_| Some("  ".into()));
        assert_eq!(options, ServiceOptions::default());
    }
}
