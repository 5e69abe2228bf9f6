//! Health monitoring handlers.

use axum::routing::get;
use axum::{Json, Router};

use crate::handler::response::HealthResponse;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "docsense_server::handler::monitors";

/// Fixed message reported while the service is up.
const HEALTH_MESSAGE: &str = "NLP service is running!";

/// Reports that the service is up.
#[tracing::instrument(skip_all)]
async fn health_status() -> Json<HealthResponse> {
    tracing::debug!(target: TRACING_TARGET, "Health status requested");

    Json(HealthResponse {
        message: HEALTH_MESSAGE.to_owned(),
    })
}

/// Returns a [`Router`] with all health monitoring routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/", get(health_status))
}
