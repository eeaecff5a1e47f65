//! Feed retrieval.
//!
//! A single blocking HTTP GET with a bounded timeout. The body is handed back
//! untouched as a [`RawFeed`]; nothing here looks at the feed format.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;

use crate::{Config, Error, Result};

/// The full response body of one feed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFeed(String);

impl RawFeed {
    pub fn new(body: impl Into<String>) -> Self {
        Self(body.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for RawFeed {
    fn from(body: String) -> Self {
        Self(body)
    }
}

/// Anything that can produce a feed document for a URL.
pub trait FeedSource {
    fn fetch(&self, url: &str) -> Result<RawFeed>;
}

/// Fetches feeds over HTTP(S) with `reqwest`'s blocking client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client using the configured user agent and timeout.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::NetworkError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl FeedSource for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<RawFeed> {
        let res = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::NetworkError(format!("HTTP GET failed: {}", e)))?
            .error_for_status()
            .map_err(|e| Error::NetworkError(format!("Feed request rejected: {}", e)))?;

        let body = res
            .text()
            .map_err(|e| Error::NetworkError(format!("Failed to read response body: {}", e)))?;

        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(RawFeed::from(body))
    }
}
