//! Commonly used items from docsense-service.
//!
//! This prelude module exports the most commonly used types, traits, and
//! services to simplify imports in consuming code.
//!
//! # Usage
//!
//! ```rust,ignore
//! use docsense_service::prelude::*;
//! ```

// NLP types and traits
pub use crate::nlp::{
    Answer, Classification, DocumentAnalysis, Entity, NlpProvider, NlpService, QaRequest,
    RawAnswer, RawEntity, RawLabel, RawSummary, Summary, SummaryParams, TextRequest,
};
// Mock provider (test-utils feature)
#[cfg(feature = "test-utils")]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
pub use crate::nlp::{MockConfig, MockProvider};
// Common types
pub use crate::types::{ServiceHealth, ServiceStatus};
pub use crate::{BoxedError, Error, ErrorKind, Result};
