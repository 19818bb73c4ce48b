//! Configuration module for the Kaddex dashboard
//! Endpoints, fetch limits and display sizes, loadable from env or JSON

use crate::core::constants;
use crate::errors::DashboardResult;
use crate::services::FetchPolicy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Default network configuration
pub const DEFAULT_NETWORK: &str = "mainnet";

/// Endpoints (pairs, stats) for a named network
pub fn get_network_endpoints(network: &str) -> (&'static str, &'static str) {
    match network {
        "testnet" | "test" => (
            constants::TESTNET_PAIRS_ENDPOINT,
            constants::TESTNET_STATS_ENDPOINT,
        ),
        "local" => (
            constants::LOCAL_PAIRS_ENDPOINT,
            constants::LOCAL_STATS_ENDPOINT,
        ),
        _ => (
            constants::MAINNET_PAIRS_ENDPOINT,
            constants::MAINNET_STATS_ENDPOINT,
        ),
    }
}

/// Data service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub network: String,
    pub pairs_endpoint: String,
    pub stats_endpoint: String,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub max_fetch_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        let (pairs, stats) = get_network_endpoints(DEFAULT_NETWORK);
        Self {
            network: DEFAULT_NETWORK.to_string(),
            pairs_endpoint: pairs.to_string(),
            stats_endpoint: stats.to_string(),
            request_timeout_secs: constants::DEFAULT_REQUEST_TIMEOUT_SECS,
            max_retries: 3,
            max_fetch_secs: constants::DEFAULT_MAX_FETCH_SECS,
        }
    }
}

/// Terminal display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Width of the stacked bar in cells
    pub bar_width: u16,
    /// Width of vote progress bars in cells
    pub progress_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bar_width: 60,
            progress_width: 30,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub services: ServiceConfig,
    pub display: DisplayConfig,
    /// Additional custom configuration
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create config for a specific network
    pub fn for_network(network: &str) -> Self {
        Self::default().with_network(network)
    }

    /// Set network, resetting both endpoints to that network's defaults
    pub fn with_network(mut self, network: &str) -> Self {
        let (pairs, stats) = get_network_endpoints(network);
        self.services.network = network.to_string();
        self.services.pairs_endpoint = pairs.to_string();
        self.services.stats_endpoint = stats.to_string();
        self
    }

    pub fn with_pairs_endpoint(mut self, endpoint: &str) -> Self {
        self.services.pairs_endpoint = endpoint.to_string();
        self
    }

    pub fn with_stats_endpoint(mut self, endpoint: &str) -> Self {
        self.services.stats_endpoint = endpoint.to_string();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.services.request_timeout_secs = secs;
        self
    }

    pub fn with_bar_width(mut self, width: u16) -> Self {
        self.display.bar_width = width;
        self
    }

    /// Retry and timeout policy for data fetches
    pub fn fetch_policy(&self) -> FetchPolicy {
        FetchPolicy::from_config(&self.services)
    }

    /// Load config from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(network) = std::env::var("KADDEX_NETWORK") {
            config = config.with_network(&network);
        }

        if let Ok(url) = std::env::var("KADDEX_PAIRS_URL") {
            config.services.pairs_endpoint = url;
        }

        if let Ok(url) = std::env::var("KADDEX_STATS_URL") {
            config.services.stats_endpoint = url;
        }

        if let Ok(timeout) = std::env::var("KADDEX_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                config.services.request_timeout_secs = t;
            }
        }

        config
    }

    /// Load config from a JSON file; missing fields take defaults
    pub fn load_from_file(path: impl AsRef<Path>) -> DashboardResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Merge with another config (other takes precedence)
    pub fn merge(mut self, other: Config) -> Self {
        let defaults = Config::default();
        if other.services != defaults.services {
            self.services = other.services;
        }
        if other.display != defaults.display {
            self.display = other.display;
        }
        self.extra.extend(other.extra);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = Config::new();
        assert_eq!(config.services.network, "mainnet");
        assert_eq!(config.display.bar_width, 60);
    }

    #[test]
    fn test_network_config() {
        let config = Config::for_network("testnet");
        assert_eq!(config.services.network, "testnet");
        assert!(config.services.stats_endpoint.contains("testnet"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = Config::new()
            .with_network("local")
            .with_stats_endpoint("http://stats")
            .with_timeout(3)
            .with_bar_width(40);

        assert_eq!(config.services.pairs_endpoint, constants::LOCAL_PAIRS_ENDPOINT);
        assert_eq!(config.services.stats_endpoint, "http://stats");
        assert_eq!(config.fetch_policy().attempt_timeout, Duration::from_secs(3));
        assert_eq!(config.display.bar_width, 40);
    }

    #[test]
    fn test_merge_prefers_non_default() {
        let base = Config::new().with_bar_width(80);
        let merged = base.merge(Config::for_network("testnet"));
        assert_eq!(merged.services.network, "testnet");
        assert_eq!(merged.display.bar_width, 80);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"display": {{"bar_width": 24}}}}"#).unwrap();
        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.display.bar_width, 24);
        assert_eq!(config.display.progress_width, 30);
        assert_eq!(config.services.network, "mainnet");
    }
}
