//! API route handlers.

use std::sync::Arc;
use std::sync::OnceLock;
use std::time::Instant;

use axum::extract::{Query, State};
use axum::Json;

use crate::dto::{HealthResponse, SearchParams, SearchResponse};
use crate::error::ApiError;
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

/// GET /api
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    // A missing q is the empty-string query, not a validation error
    let query = params.q.unwrap_or_default();

    let lookup = state.lookup.resolve(&query).await?;

    Ok(Json(SearchResponse {
        cache: lookup.from_cache,
        data: lookup.places,
    }))
}

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    let start = START_TIME.get_or_init(Instant::now);

    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        uptime_seconds: start.elapsed().as_secs(),
    })
}
