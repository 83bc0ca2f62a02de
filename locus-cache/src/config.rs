//! Cache connection configuration.
//!
//! The store address comes from the environment in one of two shapes:
//! local mode (`LOCAL=true`), where `REDIS_URL` is a bare host completed
//! with the default port, or URL mode, where `REDIS_URL` is a full
//! `redis://` connection string.

use locus_core::constants::REDIS_LOCAL_PORT;
use locus_core::error::{Error, Result};

/// How to reach the Redis store.
#[derive(Clone, Debug, PartialEq)]
pub enum RedisMode {
    /// A bare host, completed with the default Redis port. No password,
    /// default database.
    Local {
        /// Hostname or address of the local Redis instance.
        host: String,
    },
    /// A full `redis://` connection URL, parsed by the client.
    Url(String),
}

/// Cache store configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct CacheConfig {
    /// Connection mode.
    pub mode: RedisMode,
}

impl CacheConfig {
    /// Builds the configuration from the environment.
    ///
    /// Reads `REDIS_URL` (required) and `LOCAL` (optional, `"true"`
    /// selects local mode). A missing `REDIS_URL` is a startup failure.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let redis_url = std::env::var("REDIS_URL")
            .map_err(|_| Error::Config("REDIS_URL is not set".into()))?;
        let local = std::env::var("LOCAL").map(|v| v == "true").unwrap_or(false);

        Ok(Self::from_parts(local, redis_url))
    }

    /// Builds the configuration from already-resolved values.
    pub fn from_parts(local: bool, redis_url: impl Into<String>) -> Self {
        let redis_url = redis_url.into();
        let mode = if local {
            RedisMode::Local { host: redis_url }
        } else {
            RedisMode::Url(redis_url)
        };
        Self { mode }
    }

    /// Returns the connection URL handed to the Redis client.
    pub fn connection_url(&self) -> String {
        match &self.mode {
            RedisMode::Local { host } => format!("redis://{}:{}", host, REDIS_LOCAL_PORT),
            RedisMode::Url(url) => url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_mode_completes_host_with_default_port() {
        let config = CacheConfig::from_parts(true, "cache.internal");
        assert_eq!(
            config.mode,
            RedisMode::Local {
                host: "cache.internal".into()
            }
        );
        assert_eq!(config.connection_url(), "redis://cache.internal:6379");
    }

    #[test]
    fn test_url_mode_passes_url_through() {
        let url = "redis://:secret@cache.example.com:6380/2";
        let config = CacheConfig::from_parts(false, url);
        assert_eq!(config.connection_url(), url);
    }
}
