//! Common traits for Locus.
//!
//! These traits define the interfaces that different implementations can satisfy,
//! enabling modularity and testing.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE STORE TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Interface for the key-value store backing the lookup cache.
///
/// Implementations might use:
/// - Redis (for production)
/// - An in-memory map (for testing/development)
///
/// Keys are opaque byte strings used verbatim; implementations must not
/// normalize them. The contract is deliberately narrow: no delete, no
/// scan, no increment — TTL eviction is the store's own business.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Fetches the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent or its entry has
    /// expired — an explicit signal distinct from a store failure.
    /// A read never mutates the entry's remaining TTL.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Stores `value` under `key` with the given time-to-live.
    ///
    /// Overwrites any existing entry and resets its expiry.
    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<()>;
}
