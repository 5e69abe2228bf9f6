//! Inference provider configuration.

use std::time::Duration;

use anyhow::Context;
use clap::Args;
use docsense_hf::{HfClient, HfConfig, HfCredentials};
use docsense_service::NlpService;
use serde::{Deserialize, Serialize};

use super::Cli;
use crate::TRACING_TARGET_CONFIG;

/// Hosted inference provider configuration.
///
/// One deployed model serves each capability; the defaults match the models
/// the service was built against and can be overridden per deployment.
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the hosted inference API.
    #[arg(
        long = "hf-base-url",
        env = "HF_BASE_URL",
        default_value = "https://api-inference.huggingface.co"
    )]
    pub hf_base_url: String,

    /// Bearer token for the inference API.
    #[arg(long = "hf-api-token", env = "HF_API_TOKEN")]
    pub hf_api_token: Option<String>,

    /// Request timeout in seconds for inference calls.
    #[arg(long = "hf-timeout", env = "HF_TIMEOUT", default_value_t = 60)]
    pub hf_timeout: u64,

    /// Model id for summarization.
    #[arg(long = "hf-summarization-model", env = "HF_SUMMARIZATION_MODEL")]
    pub hf_summarization_model: Option<String>,

    /// Model id for named-entity recognition.
    #[arg(long = "hf-ner-model", env = "HF_NER_MODEL")]
    pub hf_ner_model: Option<String>,

    /// Model id for text classification.
    #[arg(long = "hf-classification-model", env = "HF_CLASSIFICATION_MODEL")]
    pub hf_classification_model: Option<String>,

    /// Model id for question answering.
    #[arg(long = "hf-qa-model", env = "HF_QA_MODEL")]
    pub hf_qa_model: Option<String>,
}

impl ProviderConfig {
    /// Validates the provider configuration.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.hf_timeout == 0 || self.hf_timeout > 600 {
            anyhow::bail!(
                "Inference timeout {} seconds is invalid. Must be between 1 and 600 seconds.",
                self.hf_timeout
            );
        }
        Ok(())
    }

    /// Logs provider configuration (without credentials).
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            base_url = %self.hf_base_url,
            authenticated = self.hf_api_token.is_some(),
            timeout_secs = self.hf_timeout,
            summarization_model = self.hf_summarization_model.as_deref()
                .unwrap_or(HfConfig::DEFAULT_SUMMARIZATION_MODEL),
            ner_model = self.hf_ner_model.as_deref()
                .unwrap_or(HfConfig::DEFAULT_NER_MODEL),
            classification_model = self.hf_classification_model.as_deref()
                .unwrap_or(HfConfig::DEFAULT_CLASSIFICATION_MODEL),
            qa_model = self.hf_qa_model.as_deref()
                .unwrap_or(HfConfig::DEFAULT_QA_MODEL),
            "Inference provider configured"
        );
    }

    /// Builds the inference client from this configuration.
    pub fn build_client(&self) -> anyhow::Result<HfClient> {
        let mut builder = HfConfig::builder()
            .with_base_url(&self.hf_base_url)
            .context("invalid inference base URL")?
            .with_timeout(Duration::from_secs(self.hf_timeout));

        if let Some(model) = &self.hf_summarization_model {
            builder = builder.with_summarization_model(model.clone());
        }
        if let Some(model) = &self.hf_ner_model {
            builder = builder.with_ner_model(model.clone());
        }
        if let Some(model) = &self.hf_classification_model {
            builder = builder.with_classification_model(model.clone());
        }
        if let Some(model) = &self.hf_qa_model {
            builder = builder.with_qa_model(model.clone());
        }

        let config = builder
            .build()
            .context("invalid inference configuration")?;

        let credentials = match &self.hf_api_token {
            Some(token) => HfCredentials::bearer_token(token.clone()),
            None => HfCredentials::none(),
        };

        HfClient::new(config, credentials).context("failed to create inference client")
    }
}

/// Creates the NLP service from CLI configuration.
///
/// # Errors
///
/// Returns an error if the inference client cannot be initialized.
#[cfg(not(feature = "mock"))]
pub fn create_nlp_service(cli: &Cli) -> anyhow::Result<NlpService> {
    let client = cli.provider.build_client()?;
    Ok(client.into_service())
}

/// Creates a mock NLP service from CLI configuration.
#[cfg(feature = "mock")]
pub fn create_nlp_service(cli: &Cli) -> anyhow::Result<NlpService> {
    tracing::warn!(
        target: TRACING_TARGET_CONFIG,
        "Serving mock NLP capabilities; no inference backend is used"
    );
    Ok(docsense_service::MockProvider::new(cli.mock.clone()).into_service())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> ProviderConfig {
        ProviderConfig {
            hf_base_url: "https://api-inference.huggingface.co".to_owned(),
            hf_api_token: None,
            hf_timeout: 60,
            hf_summarization_model: None,
            hf_ner_model: None,
            hf_classification_model: None,
            hf_qa_model: None,
        }
    }

    #[test]
    fn default_models_reach_the_client() {
        let client = base_config().build_client().expect("valid client");

        assert_eq!(
            client.config().summarization_model,
            HfConfig::DEFAULT_SUMMARIZATION_MODEL
        );
        assert_eq!(client.config().qa_model, HfConfig::DEFAULT_QA_MODEL);
    }

    #[test]
    fn model_overrides_reach_the_client() {
        let mut config = base_config();
        config.hf_ner_model = Some("dbmdz/bert-large-cased-finetuned-conll03-english".to_owned());

        let client = config.build_client().expect("valid client");
        assert_eq!(
            client.config().ner_model,
            "dbmdz/bert-large-cased-finetuned-conll03-english"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let mut config = base_config();
        config.hf_base_url = "not a url".to_owned();

        assert!(config.build_client().is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = base_config();
        config.hf_timeout = 0;

        assert!(config.validate().is_err());
    }
}
