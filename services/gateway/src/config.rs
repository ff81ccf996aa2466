use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://groww.in/v1/api/stocks_fo_data/v1";

/// Idle connections are dropped (and their hosts re-resolved) after this long
pub const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Outbound client and retry settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub base_url: String,
    /// Total timeout for one attempt, connect through body
    pub timeout: Duration,
    pub max_attempts: u32,
    /// Fixed pause between failed attempts
    pub retry_delay: Duration,
    /// Concurrent outbound requests, also the idle pool size
    pub max_connections: usize,
    pub pool_idle_timeout: Duration,
    /// Top-level fields a 200 body must carry; empty disables the check
    pub required_fields: Vec<String>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            timeout: Duration::from_secs(8),
            max_attempts: 3,
            retry_delay: Duration::from_millis(500),
            max_connections: 200,
            pool_idle_timeout: POOL_IDLE_TIMEOUT,
            required_fields: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub port: u16,
    pub upstream: UpstreamConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upstream: UpstreamConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Create config from environment variables
    ///
    /// Reads:
    /// - `PORT`: listening port
    /// - `UPSTREAM_BASE_URL`: URL prefix before the API path
    /// - `UPSTREAM_TIMEOUT_SECS`: per-attempt timeout, at least 1
    /// - `UPSTREAM_MAX_ATTEMPTS`: attempts per fetch, at least 1
    /// - `UPSTREAM_RETRY_DELAY_MS`: delay between attempts
    /// - `UPSTREAM_MAX_CONNECTIONS`: outbound concurrency, at least 1
    /// - `REQUIRED_FIELDS`: comma-separated field names
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = UpstreamConfig::default();

        let port = parse_var(&lookup, "PORT", DEFAULT_PORT)?;
        let base_url = lookup("UPSTREAM_BASE_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.base_url);
        let timeout_secs = parse_var(&lookup, "UPSTREAM_TIMEOUT_SECS", defaults.timeout.as_secs())?;
        let max_attempts = parse_var(&lookup, "UPSTREAM_MAX_ATTEMPTS", defaults.max_attempts)?;
        let retry_delay_ms = parse_var(
            &lookup,
            "UPSTREAM_RETRY_DELAY_MS",
            defaults.retry_delay.as_millis() as u64,
        )?;
        let max_connections =
            parse_var(&lookup, "UPSTREAM_MAX_CONNECTIONS", defaults.max_connections)?;
        let required_fields = lookup("REQUIRED_FIELDS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|f| !f.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "UPSTREAM_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }
        if max_attempts == 0 {
            return Err(ConfigError::Invalid {
                name: "UPSTREAM_MAX_ATTEMPTS",
                value: "0".to_string(),
            });
        }
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                name: "UPSTREAM_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            port,
            upstream: UpstreamConfig {
                base_url,
                timeout: Duration::from_secs(timeout_secs),
                max_attempts,
                retry_delay: Duration::from_millis(retry_delay_ms),
                max_connections,
                pool_idle_timeout: defaults.pool_idle_timeout,
                required_fields,
            },
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = GatewayConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, GatewayConfig::default());
        assert_eq!(config.port, 8000);
        assert_eq!(config.upstream.timeout, Duration::from_secs(8));
        assert_eq!(config.upstream.max_attempts, 3);
        assert_eq!(config.upstream.max_connections, 200);
        assert!(config.upstream.required_fields.is_empty());
    }

    #[test]
    fn test_port_override() {
        let config = GatewayConfig::from_lookup(lookup_from(&[("PORT", "9090")])).unwrap();
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = GatewayConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn test_zero_attempts_is_rejected() {
        let err = GatewayConfig::from_lookup(lookup_from(&[("UPSTREAM_MAX_ATTEMPTS", "0")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "UPSTREAM_MAX_ATTEMPTS",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let err = GatewayConfig::from_lookup(lookup_from(&[("UPSTREAM_TIMEOUT_SECS", "0")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "UPSTREAM_TIMEOUT_SECS",
                value: "0".to_string()
            }
        );
    }

    #[test]
    fn test_upstream_overrides() {
        let config = GatewayConfig::from_lookup(lookup_from(&[
            ("UPSTREAM_BASE_URL", "http://127.0.0.1:9000/api/"),
            ("UPSTREAM_TIMEOUT_SECS", "2"),
            ("UPSTREAM_RETRY_DELAY_MS", "1000"),
            ("REQUIRED_FIELDS", "high, low,,"),
        ]))
        .unwrap();
        assert_eq!(config.upstream.base_url, "http://127.0.0.1:9000/api/");
        assert_eq!(config.upstream.timeout, Duration::from_secs(2));
        assert_eq!(config.upstream.retry_delay, Duration::from_millis(1000));
        assert_eq!(config.upstream.required_fields, vec!["high", "low"]);
    }
}
