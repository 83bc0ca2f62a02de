//! DTOs for API requests and responses.

use serde::{Deserialize, Serialize};

use locus_core::types::Place;

/// Query parameters for the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// The geocoding query. Missing or empty is the empty-string query.
    pub q: Option<String>,
}

/// Response envelope for a resolved query.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// True iff the data was served from a cache entry
    pub cache: bool,
    /// Places in upstream order
    pub data: Vec<Place>,
}

/// Response for the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" when the process is serving
    pub status: String,
    /// Crate version
    pub version: String,
    /// Seconds since the first health check
    pub uptime_seconds: u64,
}
