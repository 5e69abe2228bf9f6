//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! Every operation shares the same failure policy: the service error is
//! converted into `{"error": ...}` at the handler boundary and returned with
//! the success status code, so the transport never surfaces a model or
//! normalization failure.
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod analysis;
mod chat;
mod error;
mod monitors;
mod response;

pub mod request;

use axum::Router;

pub use crate::handler::error::{Error, Result};
pub use crate::handler::response::{
    ClassificationResponse, EntitiesResponse, ErrorResponse, HealthResponse,
};
use crate::service::ServiceState;

/// Returns a [`Router`] with all routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .merge(monitors::routes())
        .merge(analysis::routes())
        .merge(chat::routes())
}
