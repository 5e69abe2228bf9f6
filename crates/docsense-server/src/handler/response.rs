//! Response schemas for the NLP endpoints.

use docsense_service::nlp::{Classification, Entity};
use serde::Serialize;

/// Health message returned from the root endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Fixed running message.
    pub message: String,
}

/// Entity list envelope returned from the NER endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct EntitiesResponse {
    /// Detected entity spans in document order.
    pub entities: Vec<Entity>,
}

/// Classification envelope returned from the classify endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResponse {
    /// One entry per label the model returned.
    pub classification: Vec<Classification>,
}

/// Uniform error payload.
///
/// Returned with the success status code in place of any success payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Descriptive message of the failure.
    pub error: String,
}
