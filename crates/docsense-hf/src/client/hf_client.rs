//! Hosted inference client implementation
//!
//! This module provides the main client interface for the hosted inference
//! API. It handles authentication, request/response processing, and
//! connection management.

use docsense_service::NlpService;
use reqwest::{Client as HttpClient, ClientBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::{HfConfig, HfCredentials};
use crate::{Error, Result, TRACING_TARGET_CLIENT};

/// Client for a hosted transformers-pipeline inference API
///
/// The client handles authentication, request routing, and connection
/// pooling. One deployed model serves each capability; the model ids live in
/// [`HfConfig`].
///
/// # Examples
///
/// ```rust,no_run
/// use docsense_hf::{HfClient, HfConfig, HfCredentials};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = HfConfig::builder()
///     .with_base_url("https://api-inference.huggingface.co")?
///     .build()?;
///
/// let client = HfClient::new(config, HfCredentials::none())?;
/// let service = client.into_service();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HfClient {
    http_client: HttpClient,
    config: HfConfig,
    credentials: HfCredentials,
}

impl HfClient {
    /// Create a new inference client with the given configuration and
    /// credentials
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn new(config: HfConfig, credentials: HfCredentials) -> Result<Self> {
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            base_url = %config.base_url,
            "Creating inference client"
        );

        let http_client = ClientBuilder::new()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            http_client,
            config,
            credentials,
        })
    }

    /// Create a new client with default configuration and no credentials
    pub fn with_defaults() -> Result<Self> {
        Self::new(HfConfig::default(), HfCredentials::none())
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &HfConfig {
        &self.config
    }

    /// Convert this client into an NLP service.
    pub fn into_service(self) -> NlpService {
        NlpService::from_provider(self)
    }

    /// Perform a health check against the inference service
    ///
    /// Queries the status endpoint of the summarization model; a success
    /// status means the API is reachable and serving.
    pub async fn health_check(&self) -> Result<()> {
        let url = self.endpoint_url("status", &self.config.summarization_model)?;

        let response = self.http_client.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(Error::api(status.as_u16(), message))
        }
    }

    /// Post a request body to the given model and decode the JSON response.
    pub(crate) async fn call_model<B, T>(&self, model: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint_url("models", model)?;

        let mut request = self.http_client.post(url).json(body);
        if let Some(token) = self.credentials.token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(Error::api(status.as_u16(), message));
        }

        Ok(response.json::<T>().await?)
    }

    fn endpoint_url(&self, prefix: &str, model: &str) -> Result<Url> {
        self.config
            .base_url
            .join(&format!("{prefix}/{model}"))
            .map_err(|e| Error::invalid_config(format!("Invalid model path '{model}': {e}")))
    }
}
