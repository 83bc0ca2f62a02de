//! Redis cache store.
//!
//! The production backend. A single [`ConnectionManager`] handle is
//! created at startup and cloned per operation; the manager multiplexes
//! requests over one connection and reconnects on failure.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::{debug, instrument};

use locus_core::error::{Error, Result};
use locus_core::traits::CacheStore;

use crate::config::CacheConfig;

/// Redis-backed cache store.
///
/// Uses `GET` for reads (nil maps to an absent key) and `SET ... EX` for
/// writes, so entry expiry is enforced by Redis itself. The handle is
/// cheap to clone and safe to share across concurrent requests.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore").finish_non_exhaustive()
    }
}

impl RedisStore {
    /// Connects to Redis using the given configuration.
    ///
    /// Fails with [`Error::Config`] when the URL does not parse or the
    /// initial connection cannot be established; callers treat that as a
    /// startup failure.
    #[instrument(skip(config))]
    pub async fn connect(config: &CacheConfig) -> Result<Self> {
        let url = config.connection_url();
        let client = redis::Client::open(url.as_str())
            .map_err(|e| Error::Config(format!("invalid redis url: {}", e)))?;

        let conn = client
            .get_connection_manager()
            .await
            .map_err(|e| Error::Config(format!("redis connection failed: {}", e)))?;

        debug!("connected to redis");
        Ok(Self { conn })
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let value: Option<Vec<u8>> = conn
            .get(key)
            .await
            .map_err(|e| Error::CacheRead(e.to_string()))?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(key, value, ttl.as_secs())
            .await
            .map_err(|e| Error::CacheWrite(e.to_string()))
    }
}
