//! NLP capability abstractions for summarization, NER, classification, and QA.
//!
//! This module provides a unified trait and types for the NLP capabilities
//! the service dispatches to:
//! - **Summarization**: abstractive summary with fixed generation constraints
//! - **NER**: named entities pre-grouped into contiguous spans
//! - **Classification**: one label per class the model returns
//! - **QA**: single best answer span for a question over a context
//!
//! # Example
//!
//! ```rust,ignore
//! use docsense_service::nlp::{NlpService, request::TextRequest};
//!
//! // Create a unified service with a provider
//! let service = NlpService::from_provider(my_provider);
//!
//! // Use individual operations
//! let summary = service.summarize(&TextRequest::new(text)).await?;
//! let entities = service.extract_entities(&TextRequest::new(text)).await?;
//! let analysis = service.analyze(&TextRequest::new(text)).await?;
//! ```

#[cfg(feature = "test-utils")]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
mod mock;
mod service;

pub mod normalize;
pub mod policy;
pub mod raw;
pub mod request;
pub mod response;

#[cfg(feature = "test-utils")]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
pub use mock::{MockConfig, MockProvider};
pub use raw::{RawAnswer, RawEntity, RawLabel, RawSummary};
pub use request::{QaRequest, SummaryParams, TextRequest};
pub use response::{Answer, Classification, DocumentAnalysis, Entity, Summary};
pub use service::NlpService;

use crate::types::ServiceHealth;
pub use crate::{Error, Result};

/// Tracing target for NLP operations.
pub const TRACING_TARGET: &str = "docsense_service::nlp";

/// Unified trait for NLP inference capabilities.
///
/// Implement this trait to create a custom inference backend. Every method
/// receives text that has already been normalized by the input policies; an
/// invocation is a single direct call with no retries, timeouts, or caching
/// at this level.
#[async_trait::async_trait]
pub trait NlpProvider: Send + Sync {
    /// Produce an abstractive summary of the provided text.
    ///
    /// The generation constraints in `params` are part of the capability
    /// contract and are the same for every request.
    async fn summarize(&self, text: &str, params: &SummaryParams) -> Result<RawSummary>;

    /// Extract named entities, pre-grouped into contiguous spans.
    ///
    /// Offsets in the returned spans are relative to `text`.
    async fn extract_entities(&self, text: &str) -> Result<Vec<RawEntity>>;

    /// Classify the provided text, returning one raw label per class the
    /// underlying model emits.
    async fn classify(&self, text: &str) -> Result<Vec<RawLabel>>;

    /// Answer a question against the provided context, returning the single
    /// best answer span.
    async fn answer(&self, question: &str, context: &str) -> Result<RawAnswer>;

    /// Perform a health check on the inference backend.
    async fn health_check(&self) -> Result<ServiceHealth>;
}
