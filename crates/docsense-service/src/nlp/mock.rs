//! Mock NLP provider for testing.
//!
//! This module provides a mock backend implementing [`NlpProvider`]. It
//! returns configurable canned results and is useful for unit and
//! integration testing.
//!
//! # Feature Flag
//!
//! This module is only available when the `test-utils` feature is enabled:
//!
//! ```toml
//! [dev-dependencies]
//! docsense-service = { version = "...", features = ["test-utils"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use docsense_service::nlp::{MockConfig, MockProvider, NlpService};
//!
//! // Create with defaults using NlpService::mock()
//! let service = NlpService::mock();
//!
//! // Or create with custom configuration
//! let config = MockConfig {
//!     mock_summary: Some("Custom summary.".into()),
//!     ..Default::default()
//! };
//! let service = NlpService::from_provider(MockProvider::new(config));
//! ```

use std::sync::Arc;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

use super::raw::{RawAnswer, RawEntity, RawLabel, RawSummary};
use super::request::SummaryParams;
use super::{NlpProvider, NlpService, Result};
use crate::Error;
use crate::types::ServiceHealth;

/// Configuration for the mock provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct MockConfig {
    /// Summary text to return for summarize requests.
    #[cfg_attr(
        feature = "config",
        arg(long = "mock-summary", env = "MOCK_SUMMARY")
    )]
    #[serde(default)]
    pub mock_summary: Option<String>,

    /// Label to return for classification requests.
    #[cfg_attr(feature = "config", arg(long = "mock-label", env = "MOCK_LABEL"))]
    #[serde(default)]
    pub mock_label: Option<String>,

    /// Answer to return for question-answering requests.
    #[cfg_attr(feature = "config", arg(long = "mock-answer", env = "MOCK_ANSWER"))]
    #[serde(default)]
    pub mock_answer: Option<String>,

    /// When set, every capability call fails with this message.
    #[cfg_attr(
        feature = "config",
        arg(long = "mock-fail-with", env = "MOCK_FAIL_WITH")
    )]
    #[serde(default)]
    pub fail_with: Option<String>,
}

impl MockConfig {
    /// Convert this configuration into an NLP service.
    pub fn into_service(self) -> NlpService {
        MockProvider::new(self).into_service()
    }
}

/// Mock provider for testing.
///
/// Implements [`NlpProvider`], returning configurable mock results for all
/// capabilities. Entity extraction emits one span covering the first
/// whitespace-delimited word so offset invariants can be exercised.
#[derive(Clone, Debug, Default)]
pub struct MockProvider {
    config: Arc<MockConfig>,
}

impl MockProvider {
    /// Creates a new mock provider with the given configuration.
    pub fn new(config: MockConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Creates a new mock provider with a custom summary.
    pub fn with_summary(summary: impl Into<String>) -> Self {
        Self::new(MockConfig {
            mock_summary: Some(summary.into()),
            ..Default::default()
        })
    }

    /// Creates a new mock provider with a custom classification label.
    pub fn with_label(label: impl Into<String>) -> Self {
        Self::new(MockConfig {
            mock_label: Some(label.into()),
            ..Default::default()
        })
    }

    /// Creates a new mock provider with a custom answer.
    pub fn with_answer(answer: impl Into<String>) -> Self {
        Self::new(MockConfig {
            mock_answer: Some(answer.into()),
            ..Default::default()
        })
    }

    /// Creates a new mock provider whose every call fails.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(MockConfig {
            fail_with: Some(message.into()),
            ..Default::default()
        })
    }

    /// Convert this provider into an NLP service.
    pub fn into_service(self) -> NlpService {
        NlpService::from_provider(self)
    }

    fn fail_if_configured(&self) -> Result<()> {
        match &self.config.fail_with {
            Some(message) => Err(Error::external_error().with_message(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl NlpProvider for MockProvider {
    async fn summarize(&self, text: &str, _params: &SummaryParams) -> Result<RawSummary> {
        self.fail_if_configured()?;

        let summary = self
            .config
            .mock_summary
            .clone()
            .unwrap_or_else(|| format!("Summary of {} characters.", text.chars().count()));

        Ok(RawSummary {
            summary_text: Some(summary),
        })
    }

    async fn extract_entities(&self, text: &str) -> Result<Vec<RawEntity>> {
        self.fail_if_configured()?;

        let word: String = text.chars().take_while(|ch| !ch.is_whitespace()).collect();
        if word.is_empty() {
            return Ok(Vec::new());
        }

        Ok(vec![RawEntity {
            entity_group: Some("MISC".to_owned()),
            score: Some(0.99),
            word: Some(word.clone()),
            start: Some(0),
            end: Some(word.chars().count() as i64),
        }])
    }

    async fn classify(&self, _text: &str) -> Result<Vec<RawLabel>> {
        self.fail_if_configured()?;

        let label = self
            .config
            .mock_label
            .clone()
            .unwrap_or_else(|| "joy".to_owned());

        Ok(vec![RawLabel {
            label: Some(label),
            score: Some(0.95),
        }])
    }

    async fn answer(&self, _question: &str, _context: &str) -> Result<RawAnswer> {
        self.fail_if_configured()?;

        let answer = self
            .config
            .mock_answer
            .clone()
            .unwrap_or_else(|| "Mock answer.".to_owned());

        Ok(RawAnswer {
            answer: Some(answer),
        })
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        match &self.config.fail_with {
            Some(message) => Ok(ServiceHealth::unhealthy(message.clone())),
            None => Ok(ServiceHealth::healthy()),
        }
    }
}
