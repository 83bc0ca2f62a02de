//! Cache-aside lookup service.
//!
//! Resolves a geocoding query by:
//! 1. Checking the cache store under the verbatim query string
//! 2. On a miss, fetching from Nominatim
//! 3. Writing the fetched result back with a 15-second TTL
//! 4. Returning the results plus whether they came from cache
//!
//! The cache read and the later write are not atomic: two concurrent
//! misses for the same query both fetch and both write, last write wins.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use locus_core::constants::CACHE_TTL_SECONDS;
use locus_core::error::{Error, Result};
use locus_core::traits::CacheStore;
use locus_core::types::Place;

use crate::nominatim::NominatimClient;

/// Lookup service configuration.
#[derive(Clone, Debug)]
pub struct LookupConfig {
    /// Seconds a cache entry lives after a miss-path write
    pub cache_ttl_seconds: u64,
    /// Degrade instead of failing when the cache store errors: a read
    /// failure becomes a miss, a write failure still serves the fetched
    /// data. Off by default — cache outages surface to the caller.
    pub degrade_on_cache_failure: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            cache_ttl_seconds: CACHE_TTL_SECONDS,
            degrade_on_cache_failure: false,
        }
    }
}

impl LookupConfig {
    /// Sets the cache entry TTL.
    pub fn with_ttl(mut self, seconds: u64) -> Self {
        self.cache_ttl_seconds = seconds;
        self
    }

    /// Enables graceful degradation on cache store failures.
    pub fn degrade_on_cache_failure(mut self) -> Self {
        self.degrade_on_cache_failure = true;
        self
    }
}

/// Result of a resolved query.
#[derive(Clone, Debug)]
pub struct Lookup {
    /// Places in upstream order
    pub places: Vec<Place>,
    /// True iff the response was decoded from a cache entry
    pub from_cache: bool,
}

/// Cache-aside lookup service.
///
/// Holds the cache store handle and the upstream client; constructed once
/// at startup and shared read-only across concurrent requests. Every call
/// to [`resolve`](Self::resolve) runs the full cache-aside sequence
/// independently — there is no request coalescing.
pub struct LookupService {
    cache: Arc<dyn CacheStore>,
    upstream: NominatimClient,
    config: LookupConfig,
}

impl LookupService {
    /// Creates a service with the default configuration.
    pub fn new(cache: Arc<dyn CacheStore>, upstream: NominatimClient) -> Self {
        Self::with_config(cache, upstream, LookupConfig::default())
    }

    /// Creates a service with custom configuration.
    pub fn with_config(
        cache: Arc<dyn CacheStore>,
        upstream: NominatimClient,
        config: LookupConfig,
    ) -> Self {
        Self {
            cache,
            upstream,
            config,
        }
    }

    /// Resolves a query through the cache-aside sequence.
    ///
    /// The query string is the cache key, verbatim — no normalization, so
    /// `"Boston"` and `"boston"` are distinct entries, and the empty
    /// string is an ordinary key.
    ///
    /// # Errors
    ///
    /// - [`Error::CacheRead`]: the cache get failed (upstream is NOT
    ///   consulted unless degradation is enabled)
    /// - [`Error::Upstream`]: the fetch failed or returned a malformed body
    /// - [`Error::CacheWrite`]: the store rejected the fill (the fetched
    ///   data is discarded unless degradation is enabled)
    /// - [`Error::Decode`]: a cache entry's bytes failed to parse
    #[instrument(skip(self))]
    pub async fn resolve(&self, query: &str) -> Result<Lookup> {
        let cached = match self.cache.get(query).await {
            Ok(cached) => cached,
            Err(err) if self.config.degrade_on_cache_failure => {
                warn!(error = %err, "cache read failed, treating as miss");
                None
            }
            Err(err) => return Err(err),
        };

        if let Some(bytes) = cached {
            let places: Vec<Place> =
                serde_json::from_slice(&bytes).map_err(|e| Error::Decode(e.to_string()))?;
            debug!(query, results = places.len(), "cache hit");
            return Ok(Lookup {
                places,
                from_cache: true,
            });
        }

        debug!(query, "cache miss, querying upstream");

        let places = self.upstream.search(query).await?;

        // Stored bytes are exactly the serialized fetch result
        let encoded =
            serde_json::to_vec(&places).map_err(|e| Error::CacheWrite(e.to_string()))?;

        match self.cache.set(query, &encoded, self.ttl()).await {
            Ok(()) => {}
            Err(err) if self.config.degrade_on_cache_failure => {
                warn!(error = %err, "cache write failed, serving upstream result uncached");
            }
            Err(err) => return Err(err),
        }

        info!(query, results = places.len(), "resolved from upstream");
        Ok(Lookup {
            places,
            from_cache: false,
        })
    }

    fn ttl(&self) -> Duration {
        Duration::from_secs(self.config.cache_ttl_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nominatim::NominatimConfig;

    use async_trait::async_trait;
    use locus_cache::MemoryStore;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Store whose reads and writes always fail with a connection error.
    struct DownStore;

    #[async_trait]
    impl CacheStore for DownStore {
        async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
            Err(Error::CacheRead("connection refused".into()))
        }

        async fn set(&self, _key: &str, _value: &[u8], _ttl: Duration) -> Result<()> {
            Err(Error::CacheWrite("connection refused".into()))
        }
    }

    /// Store that reads as empty but rejects every write.
    struct ReadOnlyStore;

    #[async_trait]
    impl CacheStore for ReadOnlyStore {
        async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: &[u8], _ttl: Duration) -> Result<()> {
            Err(Error::CacheWrite("read-only".into()))
        }
    }

    fn boston_body() -> serde_json::Value {
        serde_json::json!([{
            "place_id": 123,
            "licence": "ODbL",
            "osm_type": "relation",
            "osm_id": 456,
            "boundingbox": ["42.2", "42.4", "-71.2", "-71.0"],
            "lat": "42.3601",
            "lon": "-71.0589",
            "display_name": "Boston, MA, USA",
            "class": "boundary",
            "type": "administrative",
            "importance": 0.8,
            "icon": ""
        }])
    }

    fn service_on(server: &MockServer, cache: Arc<dyn CacheStore>) -> LookupService {
        let client =
            NominatimClient::with_config(NominatimConfig::new(format!("{}/search", server.uri())));
        LookupService::new(cache, client)
    }

    #[tokio::test]
    async fn test_miss_fetches_upstream_and_fills_cache() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "Boston"))
            .respond_with(ResponseTemplate::new(200).set_body_json(boston_body()))
            .expect(1)
            .mount(&server)
            .await;

        let store = Arc::new(MemoryStore::new());
        let service = service_on(&server, store.clone());

        let lookup = service.resolve("Boston").await.unwrap();
        assert!(!lookup.from_cache);
        assert_eq!(lookup.places.len(), 1);
        assert_eq!(lookup.places[0].display_name, "Boston, MA, USA");
        assert_eq!(lookup.places[0].kind, "administrative");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_second_resolve_hits_cache_without_upstream_call() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "Boston"))
            .respond_with(ResponseTemplate::new(200).set_body_json(boston_body()))
            .expect(1)
            .mount(&server)
            .await;

        let service = service_on(&server, Arc::new(MemoryStore::new()));

        let first = service.resolve("Boston").await.unwrap();
        let second = service.resolve("Boston").await.unwrap();

        assert!(!first.from_cache);
        assert!(second.from_cache);
        assert_eq!(first.places, second.places);
        // Byte-equivalent, not merely structurally equal
        assert_eq!(
            serde_json::to_vec(&first.places).unwrap(),
            serde_json::to_vec(&second.places).unwrap()
        );
    }

    #[tokio::test]
    async fn test_expired_entry_is_a_fresh_miss() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "Boston"))
            .respond_with(ResponseTemplate::new(200).set_body_json(boston_body()))
            .expect(2)
            .mount(&server)
            .await;

        let store = Arc::new(MemoryStore::new());
        let service = service_on(&server, store.clone());

        service.resolve("Boston").await.unwrap();

        // Age the entry out by rewriting it with a tiny TTL
        let bytes = store.get("Boston").await.unwrap().unwrap();
        store
            .set("Boston", &bytes, Duration::from_millis(5))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;

        let lookup = service.resolve("Boston").await.unwrap();
        assert!(!lookup.from_cache);
    }

    #[tokio::test]
    async fn test_cache_read_failure_fails_fast() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(boston_body()))
            .expect(0)
            .mount(&server)
            .await;

        let service = service_on(&server, Arc::new(DownStore));

        let err = service.resolve("Boston").await.unwrap_err();
        assert!(matches!(err, Error::CacheRead(_)));
    }

    #[tokio::test]
    async fn test_cache_write_failure_aborts_by_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(boston_body()))
            .expect(1)
            .mount(&server)
            .await;

        let service = service_on(&server, Arc::new(ReadOnlyStore));

        let err = service.resolve("Boston").await.unwrap_err();
        assert!(matches!(err, Error::CacheWrite(_)));
    }

    #[tokio::test]
    async fn test_degraded_mode_survives_cache_outage() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(boston_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client =
            NominatimClient::with_config(NominatimConfig::new(format!("{}/search", server.uri())));
        let service = LookupService::with_config(
            Arc::new(DownStore),
            client,
            LookupConfig::default().degrade_on_cache_failure(),
        );

        let lookup = service.resolve("Boston").await.unwrap();
        assert!(!lookup.from_cache);
        assert_eq!(lookup.places.len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_upstream_body_skips_cache_fill() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"not": "an array"})),
            )
            .mount(&server)
            .await;

        let store = Arc::new(MemoryStore::new());
        let service = service_on(&server, store.clone());

        let err = service.resolve("Boston").await.unwrap_err();
        assert!(matches!(err, Error::Upstream(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_cache_entry_is_decode_error() {
        let server = MockServer::start().await;
        let store = Arc::new(MemoryStore::new());
        store
            .set("Boston", b"not json at all", Duration::from_secs(15))
            .await
            .unwrap();

        let service = service_on(&server, store);

        let err = service.resolve("Boston").await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn test_empty_query_follows_normal_miss_hit_logic() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", ""))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let service = service_on(&server, Arc::new(MemoryStore::new()));

        let first = service.resolve("").await.unwrap();
        let second = service.resolve("").await.unwrap();

        assert!(!first.from_cache);
        assert!(second.from_cache);
        assert!(second.places.is_empty());
    }

    #[tokio::test]
    async fn test_distinct_casing_means_distinct_entries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(boston_body()))
            .expect(2)
            .mount(&server)
            .await;

        let service = service_on(&server, Arc::new(MemoryStore::new()));

        let upper = service.resolve("Boston").await.unwrap();
        let lower = service.resolve("boston").await.unwrap();

        assert!(!upper.from_cache);
        assert!(!lower.from_cache);
    }
}
