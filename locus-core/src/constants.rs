//! Protocol constants for Locus.
//!
//! TTL and upstream values match the deployed proxy contract: cache entries
//! live for exactly 15 seconds from write, and the upstream is the public
//! Nominatim search endpoint.

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE CONSTANTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Seconds a cache entry lives after being written.
///
/// The expiry is absolute: a read never extends it, and a rewrite of the
/// same key resets it.
pub const CACHE_TTL_SECONDS: u64 = 15;

// ═══════════════════════════════════════════════════════════════════════════════
// UPSTREAM CONSTANTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Base URL of the Nominatim search endpoint.
pub const NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Per-call timeout for upstream requests, in seconds.
pub const UPSTREAM_TIMEOUT_SECONDS: u64 = 30;

// ═══════════════════════════════════════════════════════════════════════════════
// SERVER CONSTANTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Default port the HTTP boundary listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Port the Redis store connects to in local mode.
pub const REDIS_LOCAL_PORT: u16 = 6379;
