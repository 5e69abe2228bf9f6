//! Handler failure boundary.

use axum::Json;
use axum::response::{IntoResponse, Response};
use derive_more::From;

use crate::handler::response::ErrorResponse;

/// Tracing target for handler error conversion.
const TRACING_TARGET: &str = "docsense_server::handler::error";

/// Result type for request handlers.
pub type Result<T> = std::result::Result<T, Error>;

/// Error returned by request handlers.
///
/// Wraps the service error so `?` works in handlers. The response carries
/// the uniform `{error}` payload with the success status code; callers must
/// never receive a transport-level failure for a per-request error.
#[derive(Debug, From)]
pub struct Error(docsense_service::Error);

impl Error {
    /// Returns the wrapped service error.
    pub fn inner(&self) -> &docsense_service::Error {
        &self.0
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!(
            target: TRACING_TARGET,
            error = %self.0,
            "Converting service error into error response"
        );

        Json(ErrorResponse {
            error: self.0.to_string(),
        })
        .into_response()
    }
}
