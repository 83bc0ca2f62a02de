//! App state: lookup service wiring and environment configuration.

use std::sync::Arc;

use locus_cache::{CacheConfig, RedisStore};
use locus_core::error::Result;
use locus_core::traits::CacheStore;
use locus_geocode::{LookupConfig, LookupService, NominatimClient, NominatimConfig};

/// Server configuration, resolved from the environment.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Cache store connection settings
    pub cache: CacheConfig,
    /// Optional upstream base URL override
    pub nominatim_url: Option<String>,
    /// Degrade instead of failing on cache store errors
    pub degrade_on_cache_failure: bool,
}

impl ApiConfig {
    /// Builds the configuration from the environment.
    ///
    /// `REDIS_URL`/`LOCAL` configure the cache connection,
    /// `NOMINATIM_URL` optionally overrides the upstream endpoint, and
    /// `LOOKUP_DEGRADE=true` opts into graceful cache degradation.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            cache: CacheConfig::from_env()?,
            nominatim_url: std::env::var("NOMINATIM_URL").ok(),
            degrade_on_cache_failure: std::env::var("LOOKUP_DEGRADE")
                .map(|v| v == "true")
                .unwrap_or(false),
        })
    }
}

/// Shared state behind every request handler.
pub struct AppState {
    /// The cache-aside lookup service
    pub lookup: LookupService,
}

impl AppState {
    /// Wraps an already-wired lookup service.
    pub fn new(lookup: LookupService) -> Self {
        Self { lookup }
    }

    /// Connects the cache store and wires the lookup service.
    ///
    /// The Redis handle created here is the one shared across all
    /// concurrent requests for the life of the process; a connection
    /// failure is a startup failure.
    pub async fn from_config(config: &ApiConfig) -> Result<Self> {
        let store = RedisStore::connect(&config.cache).await?;
        Ok(Self::with_store(Arc::new(store), config))
    }

    /// Wires the lookup service around the given cache store.
    pub fn with_store(store: Arc<dyn CacheStore>, config: &ApiConfig) -> Self {
        let upstream = match &config.nominatim_url {
            Some(url) => NominatimClient::with_config(NominatimConfig::new(url)),
            None => NominatimClient::new(),
        };

        let mut lookup_config = LookupConfig::default();
        if config.degrade_on_cache_failure {
            lookup_config = lookup_config.degrade_on_cache_failure();
        }

        Self::new(LookupService::with_config(store, upstream, lookup_config))
    }
}
