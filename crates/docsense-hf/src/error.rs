//! Error types for docsense-hf.

use thiserror::Error;

/// Error type for the docsense-hf library.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport errors from reqwest.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success responses from the inference API.
    #[error("Inference API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// Configuration errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an API error from a status code and response body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

/// Result type alias for docsense-hf operations.
pub type Result<T> = std::result::Result<T, Error>;
