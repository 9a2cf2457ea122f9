//! API server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable              | Default   |
//! |-----------------------|-----------|
//! | `CHECKOUT_BIND_ADDR`  | `0.0.0.0` |
//! | `CHECKOUT_PORT`       | `8000`    |
//! | `CHECKOUT_LOG_LEVEL`  | `info`    |
//! | `CHECKOUT_SEED_RULES` | `true`    |

use std::env;
use std::net::{IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub bind_addr: IpAddr,

    /// HTTP port
    pub port: u16,

    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,

    /// Start with the A/B/C/D rule set instead of an empty store
    pub seed_rules: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: IpAddr::from([0, 0, 0, 0]),
            port: 8000,
            log_level: "info".to_string(),
            seed_rules: true,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            bind_addr: match lookup("CHECKOUT_BIND_ADDR") {
                Some(raw) => raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("CHECKOUT_BIND_ADDR".to_string()))?,
                None => defaults.bind_addr,
            },

            port: match lookup("CHECKOUT_PORT") {
                Some(raw) => raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("CHECKOUT_PORT".to_string()))?,
                None => defaults.port,
            },

            log_level: lookup("CHECKOUT_LOG_LEVEL").unwrap_or(defaults.log_level),

            seed_rules: match lookup("CHECKOUT_SEED_RULES") {
                Some(raw) => parse_bool(&raw)
                    .ok_or_else(|| ConfigError::InvalidValue("CHECKOUT_SEED_RULES".to_string()))?,
                None => defaults.seed_rules,
            },
        };

        if config.log_level.trim().is_empty() {
            return Err(ConfigError::MissingRequired("CHECKOUT_LOG_LEVEL".to_string()));
        }

        Ok(config)
    }

    /// Returns the full listen address.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8000");
        assert!(config.seed_rules);
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("CHECKOUT_BIND_ADDR", "127.0.0.1"),
            ("CHECKOUT_PORT", "9090"),
            ("CHECKOUT_SEED_RULES", "off"),
            ("CHECKOUT_LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9090");
        assert!(!config.seed_rules);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_values() {
        let err = ApiConfig::from_lookup(lookup(&[("CHECKOUT_PORT", "eighty")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for CHECKOUT_PORT");

        assert!(ApiConfig::from_lookup(lookup(&[("CHECKOUT_SEED_RULES", "maybe")])).is_err());
        assert!(ApiConfig::from_lookup(lookup(&[("CHECKOUT_LOG_LEVEL", " ")])).is_err());
    }
}
