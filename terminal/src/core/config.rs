//! # Application Configuration
//!
//! Static configuration assembled once at startup and handed to the services
//! that need it. Every value has a fixed default; environment variables only
//! override them.
//!
//! | Variable                  | Default                   |
//! |---------------------------|---------------------------|
//! | `LLAMA_API_BASE_URL`      | `https://api.llama.fi`    |
//! | `LLAMA_API_TIMEOUT_SECS`  | `30`                      |
//! | `LLAMA_CACHE_STALE_SECS`  | `300` (5 minutes)         |
//! | `LLAMA_CACHE_TIME_SECS`   | `600` (10 minutes)        |
//! | `LLAMA_CACHE_RETRY`       | `2`                       |
//! | `LLAMA_CLUSTER`           | `devnet`                  |

use std::str::FromStr;
use std::time::Duration;

use crate::core::error::{AppError, Result};
use crate::services::cache::CacheConfig;
use crate::services::cluster::{Cluster, ConnectionConfig};

/// Public DefiLlama API endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://api.llama.fi";

/// Request timeout for every API call
pub const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client settings
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: DEFAULT_API_TIMEOUT,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub cache: CacheConfig,
    pub connection: ConnectionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults; set but unparsable keys are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("LLAMA_API_BASE_URL") {
            let url = url.trim_end_matches('/').to_string();
            if url.is_empty() {
                return Err(AppError::Config("LLAMA_API_BASE_URL must not be empty".to_string()));
            }
            config.api.base_url = url;
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "LLAMA_API_TIMEOUT_SECS")? {
            config.api.timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "LLAMA_CACHE_STALE_SECS")? {
            config.cache.stale_time = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "LLAMA_CACHE_TIME_SECS")? {
            config.cache.cache_time = Duration::from_secs(secs);
        }
        if let Some(retry) = parse_var::<u32, _>(&lookup, "LLAMA_CACHE_RETRY")? {
            config.cache.retry = retry;
        }
        if let Some(cluster) = parse_var::<Cluster, _>(&lookup, "LLAMA_CLUSTER")? {
            config.connection.cluster = cluster;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.timeout.is_zero() {
            return Err(AppError::Config("LLAMA_API_TIMEOUT_SECS must be greater than 0".to_string()));
        }
        if self.cache.cache_time < self.cache.stale_time {
            return Err(AppError::Config(
                "LLAMA_CACHE_TIME_SECS must not be shorter than LLAMA_CACHE_STALE_SECS".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::Config(format!("{} has an invalid value: {}", key, raw))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.api.base_url, "https://api.llama.fi");
        assert_eq!(config.api.timeout, Duration::from_secs(30));
        assert_eq!(config.cache.stale_time, Duration::from_secs(300));
        assert_eq!(config.cache.cache_time, Duration::from_secs(600));
        assert_eq!(config.cache.retry, 2);
        assert_eq!(config.connection.cluster, Cluster::Devnet);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("LLAMA_API_BASE_URL", "http://127.0.0.1:9000/"),
            ("LLAMA_CACHE_RETRY", "0"),
            ("LLAMA_CACHE_TIME_SECS", "900"),
            ("LLAMA_CLUSTER", "mainnet-beta"),
        ]))
        .unwrap();

        assert_eq!(config.cache.cache_time, Duration::from_secs(900));

        assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.cache.retry, 0);
        assert_eq!(config.connection.cluster, Cluster::MainnetBeta);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("LLAMA_CACHE_RETRY", "two")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = AppConfig::from_lookup(lookup_from(&[("LLAMA_API_TIMEOUT_SECS", "0")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = AppConfig::from_lookup(lookup_from(&[("LLAMA_CACHE_TIME_SECS", "10")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
