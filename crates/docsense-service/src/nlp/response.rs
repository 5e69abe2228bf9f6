//! Normalized result types returned to clients.

use serde::{Deserialize, Serialize};

/// Result of a summarization request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Generated summary, or the too-short sentinel.
    pub summary: String,
}

impl Summary {
    /// Sentinel returned for input below the summarization minimum.
    pub const TOO_SHORT: &'static str = "Text too short to summarize.";

    /// Creates a new summary result.
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
        }
    }

    /// Creates the too-short sentinel result.
    pub fn too_short() -> Self {
        Self::new(Self::TOO_SHORT)
    }
}

/// One detected entity span.
///
/// Offsets are relative to the normalized (post-truncation) text, with
/// `start <= end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity category, e.g. `PER` or `ORG`.
    pub entity_group: String,
    /// Confidence score in `[0, 1]`.
    pub score: f32,
    /// Surface form of the span.
    pub word: String,
    /// Span start offset.
    pub start: usize,
    /// Span end offset.
    pub end: usize,
}

/// One classification label with the shared clause excerpt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// First 100 characters of the normalized input; identical across all
    /// entries of one response.
    pub clause: String,
    /// Title-cased model label.
    #[serde(rename = "riskLevel")]
    pub risk_level: String,
    /// Confidence score in `[0, 1]`.
    pub score: f32,
}

/// Result of a question-answering request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Best answer span, or a missing-input sentinel.
    pub answer: String,
}

impl Answer {
    /// Sentinel returned by the answer operation when question or context is
    /// empty.
    pub const MISSING_QUESTION_OR_CONTEXT: &'static str = "Missing question or context.";

    /// Sentinel returned by the chat operation when question or context is
    /// empty.
    pub const MISSING_INPUT: &'static str = "Missing input.";

    /// Creates a new answer result.
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}

/// Combined result of the analyze operation.
///
/// Every part is computed from the same normalized text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    /// Abstractive summary of the document.
    #[serde(flatten)]
    pub summary: Summary,
    /// Detected entity spans in document order.
    pub entities: Vec<Entity>,
    /// Classification labels with the shared clause excerpt.
    pub classification: Vec<Classification>,
}
