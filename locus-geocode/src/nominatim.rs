//! Nominatim upstream client.
//!
//! A thin HTTP GET wrapper around the public Nominatim search API. The
//! query string goes into the `q` parameter through reqwest's query-pair
//! encoding, so arbitrary input is safely escaped into the URL.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use locus_core::constants::{NOMINATIM_BASE_URL, UPSTREAM_TIMEOUT_SECONDS};
use locus_core::error::{Error, Result};
use locus_core::types::Place;

/// Nominatim client configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL of the search endpoint
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: NOMINATIM_BASE_URL.into(),
            timeout_seconds: UPSTREAM_TIMEOUT_SECONDS,
        }
    }
}

impl NominatimConfig {
    /// Creates a configuration with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// HTTP client for the Nominatim search API.
pub struct NominatimClient {
    config: NominatimConfig,
    http_client: reqwest::Client,
}

impl NominatimClient {
    /// Creates a client against the public Nominatim endpoint.
    pub fn new() -> Self {
        Self::with_config(NominatimConfig::default())
    }

    /// Creates a client with custom configuration.
    pub fn with_config(config: NominatimConfig) -> Self {
        // Nominatim's usage policy requires an identifying User-Agent
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("locus/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    /// Searches for places matching `query`.
    ///
    /// Issues `GET {base_url}?q={query}&format=json` and decodes the JSON
    /// array response. A network failure, a non-success status, or a body
    /// that is not an array of places all fail with [`Error::Upstream`].
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Place>> {
        let response = self
            .http_client
            .get(&self.config.base_url)
            .query(&[("q", query), ("format", "json")])
            .send()
            .await
            .map_err(|e| Error::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Upstream(format!("HTTP {}", response.status())));
        }

        let places: Vec<Place> = response
            .json()
            .await
            .map_err(|e| Error::Upstream(e.to_string()))?;

        debug!(query, results = places.len(), "upstream search complete");
        Ok(places)
    }
}

impl Default for NominatimClient {
    fn default() -> Self {
        Self::new()
    }
}
