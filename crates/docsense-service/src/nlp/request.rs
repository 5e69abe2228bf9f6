//! Request types for NLP operations.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A free-text inference request.
///
/// The text is consumed exactly once per request and never mutated after
/// normalization; truncation produces a new value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRequest {
    /// Unique identifier for this request.
    pub request_id: Uuid,
    /// Raw document text as received from the client.
    pub text: String,
}

impl TextRequest {
    /// Creates a new text request.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::now_v7(),
            text: text.into(),
        }
    }
}

impl From<String> for TextRequest {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// A question-answering request over a context document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaRequest {
    /// Unique identifier for this request.
    pub request_id: Uuid,
    /// Document text the question is asked against.
    pub context: String,
    /// The question to answer.
    pub question: String,
}

impl QaRequest {
    /// Creates a new question-answering request.
    pub fn new(context: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::now_v7(),
            context: context.into(),
            question: question.into(),
        }
    }
}

/// Generation constraints for summarization.
///
/// These values are part of the capability contract: every summarize call
/// uses the same constraints, and sampling is disabled so identical input
/// yields identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryParams {
    /// Maximum summary length in tokens.
    pub max_length: u32,
    /// Minimum summary length in tokens.
    pub min_length: u32,
    /// Whether the decoder may sample.
    pub do_sample: bool,
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            max_length: 130,
            min_length: 30,
            do_sample: false,
        }
    }
}
