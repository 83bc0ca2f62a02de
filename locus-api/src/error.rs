//! API error handling.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use locus_core::error::Error;

/// Error returned by request handlers.
///
/// The boundary contract collapses every lookup failure — cache read,
/// cache write, upstream, decode — to a 500 with an empty body; the
/// client learns nothing about which stage failed. The detail lands in
/// the structured log instead.
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "lookup failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
