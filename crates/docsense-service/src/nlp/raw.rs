//! Raw provider output shapes.
//!
//! These types mirror what inference backends actually emit, with every
//! field optional. They are the single translation boundary between the
//! underlying model library's output shape and the stable response types in
//! [`response`](super::response); nothing outside the normalizer should read
//! them.

/// Raw output of a summarization call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSummary {
    /// Generated summary text.
    pub summary_text: Option<String>,
}

/// One raw grouped entity span.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEntity {
    /// Entity category, e.g. `PER` or `ORG`.
    pub entity_group: Option<String>,
    /// Confidence score.
    pub score: Option<f64>,
    /// Surface form of the span.
    pub word: Option<String>,
    /// Span start offset in the normalized text.
    pub start: Option<i64>,
    /// Span end offset in the normalized text.
    pub end: Option<i64>,
}

/// One raw classification label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawLabel {
    /// Class label as emitted by the model.
    pub label: Option<String>,
    /// Confidence score.
    pub score: Option<f64>,
}

/// Raw output of a question-answering call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawAnswer {
    /// Best answer span.
    pub answer: Option<String>,
}
