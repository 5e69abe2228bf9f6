//! Inference client configuration
//!
//! This module provides configuration structures and builders for the hosted
//! inference client.

use std::time::Duration;

use derive_builder::Builder;
use url::Url;

use crate::error::{Error, Result};

/// Configuration for the hosted inference client
///
/// Contains all the settings needed to configure the client behavior,
/// including timeouts, the API endpoint, and the model deployed for each
/// capability.
#[derive(Debug, Clone, Builder)]
#[builder(
    name = "HfBuilder",
    pattern = "owned",
    setter(into, prefix = "with"),
    build_fn(validate = "Self::validate_config")
)]
pub struct HfConfig {
    /// Base URL for the inference API
    #[builder(setter(custom), default = "HfConfig::default_base_url()")]
    pub base_url: Url,
    /// Request timeout duration
    #[builder(default = "Duration::from_secs(60)")]
    pub timeout: Duration,
    /// Connection timeout duration
    #[builder(default = "Duration::from_secs(10)")]
    pub connect_timeout: Duration,
    /// User agent string for requests
    #[builder(default = "HfConfig::default_user_agent()")]
    pub user_agent: String,
    /// Model deployed for summarization
    #[builder(default = "HfConfig::DEFAULT_SUMMARIZATION_MODEL.to_owned()")]
    pub summarization_model: String,
    /// Model deployed for named-entity recognition
    #[builder(default = "HfConfig::DEFAULT_NER_MODEL.to_owned()")]
    pub ner_model: String,
    /// Model deployed for text classification
    #[builder(default = "HfConfig::DEFAULT_CLASSIFICATION_MODEL.to_owned()")]
    pub classification_model: String,
    /// Model deployed for question answering
    #[builder(default = "HfConfig::DEFAULT_QA_MODEL.to_owned()")]
    pub qa_model: String,
}

impl Default for HfConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
            user_agent: Self::default_user_agent(),
            summarization_model: Self::DEFAULT_SUMMARIZATION_MODEL.to_owned(),
            ner_model: Self::DEFAULT_NER_MODEL.to_owned(),
            classification_model: Self::DEFAULT_CLASSIFICATION_MODEL.to_owned(),
            qa_model: Self::DEFAULT_QA_MODEL.to_owned(),
        }
    }
}

impl HfConfig {
    /// Default summarization model.
    pub const DEFAULT_SUMMARIZATION_MODEL: &'static str = "facebook/bart-large-cnn";
    /// Default NER model; serves grouped entity spans.
    pub const DEFAULT_NER_MODEL: &'static str = "dslim/bert-base-NER";
    /// Default text classification model.
    pub const DEFAULT_CLASSIFICATION_MODEL: &'static str =
        "bhadresh-savani/bert-base-uncased-emotion";
    /// Default extractive question-answering model.
    pub const DEFAULT_QA_MODEL: &'static str = "distilbert-base-uncased-distilled-squad";

    /// Create a new configuration builder
    pub fn builder() -> HfBuilder {
        HfBuilder::default()
    }

    fn default_base_url() -> Url {
        "https://api-inference.huggingface.co"
            .parse()
            .expect("Valid default URL")
    }

    fn default_user_agent() -> String {
        format!("docsense-hf/{}", env!("CARGO_PKG_VERSION"))
    }
}

impl HfBuilder {
    /// Set the base URL for the inference API
    pub fn with_base_url(mut self, url: &str) -> Result<Self> {
        self.base_url =
            Some(url.parse().map_err(|e| {
                Error::invalid_config(format!("Invalid base URL '{}': {}", url, e))
            })?);
        Ok(self)
    }

    fn validate_config(&self) -> std::result::Result<(), String> {
        if let Some(timeout) = &self.timeout {
            if timeout.as_secs() == 0 {
                return Err("Timeout must be greater than 0".to_string());
            }
        }

        if let Some(connect_timeout) = &self.connect_timeout {
            if connect_timeout.as_secs() == 0 {
                return Err("Connect timeout must be greater than 0".to_string());
            }
        }

        for (field, model) in [
            ("summarization_model", &self.summarization_model),
            ("ner_model", &self.ner_model),
            ("classification_model", &self.classification_model),
            ("qa_model", &self.qa_model),
        ] {
            if let Some(model) = model {
                if model.trim().is_empty() {
                    return Err(format!("{field} must not be empty"));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HfConfig::default();

        assert_eq!(config.base_url.as_str(), "https://api-inference.huggingface.co/");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.summarization_model, "facebook/bart-large-cnn");
        assert_eq!(config.qa_model, "distilbert-base-uncased-distilled-squad");
    }

    #[test]
    fn test_config_builder() {
        let config = HfConfig::builder()
            .with_timeout(Duration::from_secs(120))
            .with_summarization_model("google/pegasus-xsum")
            .build()
            .expect("Valid config");

        assert_eq!(config.timeout, Duration::from_secs(120));
        assert_eq!(config.summarization_model, "google/pegasus-xsum");
        assert_eq!(config.ner_model, HfConfig::DEFAULT_NER_MODEL);
    }

    #[test]
    fn test_custom_base_url() {
        let config = HfConfig::builder()
            .with_base_url("http://inference.internal:8080")
            .expect("Valid URL")
            .build()
            .expect("Valid config");

        assert_eq!(config.base_url.as_str(), "http://inference.internal:8080/");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HfConfig::builder().with_base_url("not-a-valid-url");

        assert!(result.is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let result = HfConfig::builder()
            .with_timeout(Duration::from_secs(0))
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_validation_empty_model() {
        let result = HfConfig::builder().with_ner_model("  ").build();

        assert!(result.is_err());
    }
}
