use crate::config::UpstreamConfig;
use crate::fetcher::LiveFetcher;
use crate::upstream::HttpUpstream;
use std::sync::Arc;

/// Shared handler state
///
/// Holds the one long-lived upstream pool for the life of the server.
/// Handlers only read it.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<LiveFetcher>,
}

impl AppState {
    pub fn new(fetcher: LiveFetcher) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
        }
    }

    /// Build the reqwest-backed pool and fetcher
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let transport = Arc::new(HttpUpstream::new(config)?);
        Ok(Self::new(LiveFetcher::new(transport, config)))
    }
}
