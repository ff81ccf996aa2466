use crate::config::UpstreamConfig;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio::sync::Semaphore;
use types::errors::AttemptError;

/// A single outbound GET returning a decoded JSON body
///
/// Implementations perform exactly one request per call and never retry.
#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value, AttemptError>;
}

/// reqwest-backed transport sharing one connection pool
///
/// Concurrency is capped by a semaphore; the idle pool is capped to the
/// same size, so at most `max_connections` sockets are ever open.
pub struct HttpUpstream {
    client: Client,
    permits: Semaphore,
}

impl HttpUpstream {
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .default_headers(default_headers())
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.max_connections)
            .pool_idle_timeout(config.pool_idle_timeout)
            .build()?;

        Ok(Self {
            client,
            permits: Semaphore::new(config.max_connections),
        })
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(
        HeaderName::from_static("x-app-id"),
        HeaderValue::from_static("growwWeb"),
    );
    headers.insert(USER_AGENT, HeaderValue::from_static("Mozilla/5.0"));
    headers
}

fn classify(err: reqwest::Error) -> AttemptError {
    if err.is_timeout() {
        AttemptError::Timeout
    } else {
        AttemptError::Transport(err.to_string())
    }
}

#[async_trait]
impl UpstreamTransport for HttpUpstream {
    async fn get_json(&self, url: &str) -> Result<Value, AttemptError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| AttemptError::Transport("connection pool closed".to_string()))?;

        let res = self.client.get(url).send().await.map_err(classify)?;

        if res.status() != StatusCode::OK {
            return Err(AttemptError::Status(res.status().as_u16()));
        }

        // Body read failures are transport errors, only a bad payload is a decode error
        let body = res.bytes().await.map_err(classify)?;
        serde_json::from_slice(&body).map_err(|e| AttemptError::Decode(e.to_string()))
    }
}
