//! Request body schemas for the NLP endpoints.

use docsense_service::nlp::{QaRequest, TextRequest};
use serde::Deserialize;

/// Body of the text-based operations.
#[derive(Debug, Clone, Deserialize)]
pub struct TextBody {
    /// Raw document text.
    pub text: String,
}

impl TextBody {
    /// Converts this body into a service request.
    pub fn into_request(self) -> TextRequest {
        TextRequest::new(self.text)
    }
}

/// Body of the question-answering operations.
#[derive(Debug, Clone, Deserialize)]
pub struct QaBody {
    /// Document text the question is asked against.
    pub context: String,
    /// The question to answer.
    pub question: String,
}

impl QaBody {
    /// Converts this body into a service request.
    pub fn into_request(self) -> QaRequest {
        QaRequest::new(self.context, self.question)
    }
}
