//! Live-data fetch with bounded retries
//!
//! One fetch = symbol validation, URL construction, then up to
//! `max_attempts` GETs separated by a fixed delay. Transport errors,
//! timeouts, non-200 statuses and undecodable bodies are retried. A decoded
//! 200 body ends the loop either way: it is returned if it is a usable
//! object, otherwise the fetch fails without another attempt.

use crate::config::UpstreamConfig;
use crate::models::{LiveQuote, Quote};
use crate::upstream::UpstreamTransport;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};
use types::errors::FetchError;
use types::route::latest_url;
use types::symbol::OptionSymbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl From<&UpstreamConfig> for RetryPolicy {
    fn from(config: &UpstreamConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            delay: config.retry_delay,
        }
    }
}

pub struct LiveFetcher {
    transport: Arc<dyn UpstreamTransport>,
    base_url: String,
    policy: RetryPolicy,
    required_fields: Vec<String>,
}

impl LiveFetcher {
    pub fn new(transport: Arc<dyn UpstreamTransport>, config: &UpstreamConfig) -> Self {
        Self {
            transport,
            base_url: config.base_url.clone(),
            policy: RetryPolicy::from(config),
            required_fields: config.required_fields.clone(),
        }
    }

    /// Fetch the latest live data for a raw, possibly lowercase, symbol
    ///
    /// Blank symbols fail before any request is made.
    pub async fn fetch(&self, raw_symbol: &str) -> Result<LiveQuote, FetchError> {
        let symbol = OptionSymbol::parse(raw_symbol)?;
        let url = latest_url(&self.base_url, &symbol);
        debug!(%symbol, %url, "Fetching live data");

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.transport.get_json(&url).await {
                Ok(value) => return self.accept(symbol, value),
                Err(err) => {
                    warn!(
                        %symbol,
                        attempt,
                        kind = err.kind(),
                        error = %err,
                        "Upstream attempt failed"
                    );
                    if attempt >= self.policy.max_attempts {
                        error!(%symbol, attempts = attempt, "Upstream retries exhausted");
                        return Err(FetchError::Exhausted {
                            attempts: attempt,
                            last: err,
                        });
                    }
                    tokio::time::sleep(self.policy.delay).await;
                }
            }
        }
    }

    fn accept(&self, symbol: OptionSymbol, value: Value) -> Result<LiveQuote, FetchError> {
        let body: Quote = match value {
            Value::Null => return Err(FetchError::EmptyBody),
            Value::Object(map) if map.is_empty() => return Err(FetchError::EmptyBody),
            Value::Object(map) => map,
            _ => return Err(FetchError::NotAnObject),
        };

        // Absent and null both count as missing
        if let Some(field) = self
            .required_fields
            .iter()
            .find(|f| body.get(f.as_str()).is_none_or(Value::is_null))
        {
            warn!(%symbol, field = %field, "Upstream body missing required field");
            return Err(FetchError::MissingField(field.clone()));
        }

        Ok(LiveQuote { symbol, body })
    }
}
