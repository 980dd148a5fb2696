//! Configuration Module
//!
//! Handles loading configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI base URL
const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default cache TTL in seconds
const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Application configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL in seconds; also the reaper's sweep period
    pub cache_ttl_secs: u64,
    /// Base URL for PokeAPI requests
    pub base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - Cache TTL in seconds (default: 300; zero is ignored)
    /// - `POKEAPI_BASE_URL` - API base URL (default: `https://pokeapi.co/api/v2`)
    pub fn from_env() -> Self {
        Self {
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&v| v > 0)
                .unwrap_or(DEFAULT_CACHE_TTL_SECS),
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Returns the cache TTL as a `Duration`.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
