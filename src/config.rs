use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Listings API base URL; the bundled catalog is used when unset
    pub listings_url: Option<String>,
    /// Lead intake API base URL; submissions stay in memory when unset
    pub leads_url: Option<String>,
    pub http_timeout: Duration,
    /// Artificial latency of the bundled catalog
    pub simulated_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listings_url: None,
            leads_url: None,
            http_timeout: Duration::from_secs(30),
            simulated_delay: Duration::from_millis(1500),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            listings_url: non_empty("AVIAN_LISTINGS_URL"),
            leads_url: non_empty("AVIAN_LEADS_URL"),
            http_timeout: match non_empty("AVIAN_HTTP_TIMEOUT_SECS") {
                Some(v) => Duration::from_secs(
                    v.trim()
                        .parse()
                        .context("AVIAN_HTTP_TIMEOUT_SECS must be a valid number")?,
                ),
                None => defaults.http_timeout,
            },
            simulated_delay: match non_empty("AVIAN_SIMULATED_DELAY_MS") {
                Some(v) => Duration::from_millis(
                    v.trim()
                        .parse()
                        .context("AVIAN_SIMULATED_DELAY_MS must be a valid number")?,
                ),
                None => defaults.simulated_delay,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.simulated_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("AVIAN_LISTINGS_URL", "https://api.example.com"),
            ("AVIAN_LEADS_URL", " "),
            ("AVIAN_HTTP_TIMEOUT_SECS", "5"),
            ("AVIAN_SIMULATED_DELAY_MS", "0"),
        ]))
        .unwrap();

        assert_eq!(config.listings_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.leads_url, None);
        assert_eq!(config.http_timeout, Duration::from_secs(5));
        assert!(config.simulated_delay.is_zero());
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let err = Config::from_lookup(lookup(&[("AVIAN_HTTP_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("AVIAN_HTTP_TIMEOUT_SECS"));
    }
}
