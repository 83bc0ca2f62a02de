//! Error types for Locus.
//!
//! This module provides the error taxonomy for the lookup path using
//! `thiserror`. Every failure along the cache-aside sequence maps to
//! exactly one variant, so callers can tell a cache outage from an
//! upstream outage even though the HTTP boundary collapses them.

use thiserror::Error;

/// Result type alias using `Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for all Locus operations.
#[derive(Debug, Error)]
pub enum Error {
    // ═══════════════════════════════════════════════════════════════════════════
    // CACHE ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The cache store failed on a read (distinct from the key being absent).
    #[error("cache read failed: {0}")]
    CacheRead(String),

    /// The cache store rejected a write.
    #[error("cache write failed: {0}")]
    CacheWrite(String),

    /// Cached bytes could not be parsed back into the result shape.
    #[error("malformed cache entry: {0}")]
    Decode(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // UPSTREAM ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The upstream geocoder call failed: network error, non-success
    /// status, or a body that is not a JSON array of places.
    #[error("upstream request failed: {0}")]
    Upstream(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Startup or environment configuration failure.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns true if this error originated at the cache store.
    pub fn is_cache_error(&self) -> bool {
        matches!(
            self,
            Error::CacheRead(_) | Error::CacheWrite(_) | Error::Decode(_)
        )
    }

    /// Returns true if retrying the same request could succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Upstream(_) | Error::CacheRead(_) | Error::CacheWrite(_)
        )
    }
}
