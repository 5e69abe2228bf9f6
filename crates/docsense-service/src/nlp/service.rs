//! Unified NLP service with input policies and observability.
//!
//! This module provides [`NlpService`] which wraps an [`NlpProvider`] and
//! adds input normalization, sentinel short-circuits, result normalization,
//! and structured logging for every operation.

use std::fmt;
use std::sync::Arc;

use jiff::Timestamp;

use super::policy::{self, Normalized};
use super::request::{QaRequest, SummaryParams, TextRequest};
use super::response::{Answer, Classification, DocumentAnalysis, Entity, Summary};
use super::{NlpProvider, Result, TRACING_TARGET, normalize};
use crate::types::ServiceHealth;
use crate::Error;

/// Unified NLP dispatch service.
///
/// The service owns the per-request pipeline: apply the capability's input
/// policy, short-circuit to a sentinel where the policy says so, invoke the
/// shared provider, and normalize the raw result. The provider is shared,
/// read-only state; cloning the service is cheap and safe across workers.
#[derive(Clone)]
pub struct NlpService {
    provider: Arc<dyn NlpProvider>,
}

impl fmt::Debug for NlpService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NlpService").finish_non_exhaustive()
    }
}

impl NlpService {
    /// Create a new NLP service from a provider.
    pub fn from_provider<P>(provider: P) -> Self
    where
        P: NlpProvider + 'static,
    {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Summarize the requested text.
    ///
    /// Input below the 30-character minimum returns the
    /// [`Summary::TOO_SHORT`] sentinel without invoking the provider.
    pub async fn summarize(&self, request: &TextRequest) -> Result<Summary> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            request_id = %request.request_id,
            "Processing summarize request"
        );

        let text = match policy::SUMMARIZE.apply(&request.text) {
            Normalized::Empty | Normalized::TooShort => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    "Input below summarization minimum, returning sentinel"
                );
                return Ok(Summary::too_short());
            }
            Normalized::Text(text) => text,
        };

        let result = self
            .provider
            .summarize(&text, &SummaryParams::default())
            .await
            .map(normalize::summary);
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(summary) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    summary_len = summary.summary.len(),
                    elapsed_ms = elapsed.as_millis(),
                    "Summarization successful"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Summarization failed"
                );
            }
        }

        result
    }

    /// Extract named entities from the requested text.
    ///
    /// Empty input yields an empty entity list without invoking the
    /// provider. Offsets in the result are relative to the truncated text.
    pub async fn extract_entities(&self, request: &TextRequest) -> Result<Vec<Entity>> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            request_id = %request.request_id,
            "Processing entity extraction request"
        );

        let text = match policy::EXTRACT_ENTITIES.apply(&request.text) {
            Normalized::Empty | Normalized::TooShort => return Ok(Vec::new()),
            Normalized::Text(text) => text,
        };

        let result = self
            .provider
            .extract_entities(&text)
            .await
            .map(normalize::entities);
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(entities) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    entity_count = entities.len(),
                    elapsed_ms = elapsed.as_millis(),
                    "Entity extraction successful"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Entity extraction failed"
                );
            }
        }

        result
    }

    /// Classify the requested text.
    ///
    /// Empty input yields an empty classification list without invoking the
    /// provider. One entry is returned per label the model emits.
    pub async fn classify(&self, request: &TextRequest) -> Result<Vec<Classification>> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            request_id = %request.request_id,
            "Processing classification request"
        );

        let text = match policy::CLASSIFY.apply(&request.text) {
            Normalized::Empty | Normalized::TooShort => return Ok(Vec::new()),
            Normalized::Text(text) => text,
        };

        let result = self
            .provider
            .classify(&text)
            .await
            .map(|labels| normalize::classifications(labels, &text));
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(classification) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    label_count = classification.len(),
                    elapsed_ms = elapsed.as_millis(),
                    "Classification successful"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Classification failed"
                );
            }
        }

        result
    }

    /// Answer a question against its context.
    ///
    /// An empty question or context yields the
    /// [`Answer::MISSING_QUESTION_OR_CONTEXT`] sentinel without invoking
    /// the provider.
    pub async fn answer(&self, request: &QaRequest) -> Result<Answer> {
        self.respond(request, Answer::MISSING_QUESTION_OR_CONTEXT)
            .await
    }

    /// Answer a chat question against its context.
    ///
    /// Contract-identical to [`answer`](Self::answer) except that the
    /// missing-input sentinel is [`Answer::MISSING_INPUT`].
    pub async fn chat(&self, request: &QaRequest) -> Result<Answer> {
        self.respond(request, Answer::MISSING_INPUT).await
    }

    async fn respond(&self, request: &QaRequest, missing_sentinel: &str) -> Result<Answer> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            request_id = %request.request_id,
            "Processing question-answering request"
        );

        let question = request.question.trim();
        let context = request.context.trim();

        if question.is_empty() || context.is_empty() {
            tracing::debug!(
                target: TRACING_TARGET,
                request_id = %request.request_id,
                "Empty question or context, returning sentinel"
            );
            return Ok(Answer::new(missing_sentinel));
        }

        let result = self
            .provider
            .answer(question, context)
            .await
            .map(normalize::answer);
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(answer) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    answer_len = answer.answer.len(),
                    elapsed_ms = elapsed.as_millis(),
                    "Question answering successful"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Question answering failed"
                );
            }
        }

        result
    }

    /// Run the combined document analysis.
    ///
    /// The input is normalized once under the analyze policy, then
    /// summarization, entity extraction, and classification run sequentially
    /// against the same normalized text. A failure in any sub-call fails the
    /// whole operation; there is no partial aggregation.
    pub async fn analyze(&self, request: &TextRequest) -> Result<DocumentAnalysis> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            request_id = %request.request_id,
            "Processing analyze request"
        );

        let text = match policy::ANALYZE.apply(&request.text) {
            Normalized::Empty | Normalized::TooShort => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    "Empty analyze input, rejecting request"
                );
                return Err(Error::invalid_input().with_message("No text provided for analysis."));
            }
            Normalized::Text(text) => text,
        };

        let result = self.run_analysis(&text).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(analysis) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    entity_count = analysis.entities.len(),
                    label_count = analysis.classification.len(),
                    elapsed_ms = elapsed.as_millis(),
                    "Document analysis successful"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    request_id = %request.request_id,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Document analysis failed"
                );
            }
        }

        result
    }

    async fn run_analysis(&self, text: &str) -> Result<DocumentAnalysis> {
        let summary = self
            .provider
            .summarize(text, &SummaryParams::default())
            .await
            .map(normalize::summary)?;

        let entities = self
            .provider
            .extract_entities(text)
            .await
            .map(normalize::entities)?;

        let classification = self
            .provider
            .classify(text)
            .await
            .map(|labels| normalize::classifications(labels, text))?;

        Ok(DocumentAnalysis {
            summary,
            entities,
            classification,
        })
    }

    /// Perform a health check on the inference backend.
    pub async fn health_check(&self) -> Result<ServiceHealth> {
        self.provider.health_check().await
    }

    /// Create a mock NLP service for testing.
    #[cfg(feature = "test-utils")]
    #[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
    pub fn mock() -> Self {
        Self::from_provider(super::MockProvider::default())
    }

    /// Create a mock NLP service with custom configuration.
    #[cfg(feature = "test-utils")]
    #[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
    pub fn mock_with_config(config: super::MockConfig) -> Self {
        Self::from_provider(super::MockProvider::new(config))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::super::NlpProvider;
    use super::super::raw::{RawAnswer, RawEntity, RawLabel, RawSummary};
    use super::*;

    /// Provider that records the text it is invoked with.
    #[derive(Default)]
    struct CapturingProvider {
        seen: Mutex<Vec<String>>,
    }

    impl CapturingProvider {
        fn texts(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }

        fn record(&self, text: &str) {
            self.seen.lock().unwrap().push(text.to_owned());
        }
    }

    #[async_trait::async_trait]
    impl NlpProvider for Arc<CapturingProvider> {
        async fn summarize(&self, text: &str, _params: &SummaryParams) -> Result<RawSummary> {
            self.record(text);
            Ok(RawSummary {
                summary_text: Some("captured".to_owned()),
            })
        }

        async fn extract_entities(&self, text: &str) -> Result<Vec<RawEntity>> {
            self.record(text);
            Ok(vec![RawEntity {
                entity_group: Some("ORG".to_owned()),
                score: Some(0.8),
                word: Some("x".to_owned()),
                start: Some(0),
                end: Some(1),
            }])
        }

        async fn classify(&self, text: &str) -> Result<Vec<RawLabel>> {
            self.record(text);
            Ok(vec![RawLabel {
                label: Some("joy".to_owned()),
                score: Some(0.6),
            }])
        }

        async fn answer(&self, _question: &str, context: &str) -> Result<RawAnswer> {
            self.record(context);
            Ok(RawAnswer {
                answer: Some("42".to_owned()),
            })
        }

        async fn health_check(&self) -> Result<ServiceHealth> {
            Ok(ServiceHealth::healthy())
        }
    }

    #[tokio::test]
    async fn summarize_short_input_returns_sentinel_without_invocation() {
        let provider = Arc::new(CapturingProvider::default());
        let service = NlpService::from_provider(provider.clone());

        let summary = service
            .summarize(&TextRequest::new("way too short"))
            .await
            .unwrap();

        assert_eq!(summary.summary, Summary::TOO_SHORT);
        assert!(provider.texts().is_empty());
    }

    #[tokio::test]
    async fn summarize_truncates_to_policy_maximum() {
        let provider = Arc::new(CapturingProvider::default());
        let service = NlpService::from_provider(provider.clone());

        let text = "a".repeat(2600);
        service.summarize(&TextRequest::new(text)).await.unwrap();

        let seen = provider.texts();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].chars().count(), 2000);
    }

    #[tokio::test]
    async fn extract_entities_empty_input_short_circuits() {
        let provider = Arc::new(CapturingProvider::default());
        let service = NlpService::from_provider(provider.clone());

        let entities = service
            .extract_entities(&TextRequest::new("   "))
            .await
            .unwrap();

        assert!(entities.is_empty());
        assert!(provider.texts().is_empty());
    }

    #[tokio::test]
    async fn classify_empty_input_short_circuits() {
        let provider = Arc::new(CapturingProvider::default());
        let service = NlpService::from_provider(provider.clone());

        let classification = service.classify(&TextRequest::new("")).await.unwrap();

        assert!(classification.is_empty());
        assert!(provider.texts().is_empty());
    }

    #[tokio::test]
    async fn classify_truncates_and_slices_clause() {
        let provider = Arc::new(CapturingProvider::default());
        let service = NlpService::from_provider(provider.clone());

        let text = "d".repeat(800);
        let classification = service.classify(&TextRequest::new(text)).await.unwrap();

        assert_eq!(provider.texts()[0].chars().count(), 512);
        assert_eq!(classification[0].clause, "d".repeat(100));
        assert_eq!(classification[0].risk_level, "Joy");
    }

    #[tokio::test]
    async fn answer_missing_input_returns_sentinels() {
        let provider = Arc::new(CapturingProvider::default());
        let service = NlpService::from_provider(provider.clone());

        let answer = service
            .answer(&QaRequest::new("some context", "   "))
            .await
            .unwrap();
        assert_eq!(answer.answer, Answer::MISSING_QUESTION_OR_CONTEXT);

        let chat = service
            .chat(&QaRequest::new("", "a question?"))
            .await
            .unwrap();
        assert_eq!(chat.answer, Answer::MISSING_INPUT);

        assert!(provider.texts().is_empty());
    }

    #[tokio::test]
    async fn answer_invokes_provider_with_trimmed_input() {
        let provider = Arc::new(CapturingProvider::default());
        let service = NlpService::from_provider(provider.clone());

        let answer = service
            .answer(&QaRequest::new("  the context  ", " the question? "))
            .await
            .unwrap();

        assert_eq!(answer.answer, "42");
        assert_eq!(provider.texts(), vec!["the context".to_owned()]);
    }

    #[tokio::test]
    async fn analyze_empty_input_is_an_error_without_invocation() {
        let provider = Arc::new(CapturingProvider::default());
        let service = NlpService::from_provider(provider.clone());

        let error = service.analyze(&TextRequest::new("  ")).await.unwrap_err();

        assert!(error.to_string().contains("No text provided for analysis."));
        assert!(provider.texts().is_empty());
    }

    #[tokio::test]
    async fn analyze_feeds_every_capability_the_same_text() {
        let provider = Arc::new(CapturingProvider::default());
        let service = NlpService::from_provider(provider.clone());

        let text = "e".repeat(3500);
        let analysis = service.analyze(&TextRequest::new(text)).await.unwrap();

        let seen = provider.texts();
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|t| t.chars().count() == 3000));
        assert!(seen.iter().all(|t| t == &seen[0]));

        // The clause comes from the analyze-normalized text, not the
        // classify policy's 512-char cut.
        assert_eq!(analysis.classification[0].clause, "e".repeat(100));
        assert_eq!(analysis.summary.summary, "captured");
        assert_eq!(analysis.entities.len(), 1);
    }

    #[tokio::test]
    async fn identical_requests_yield_identical_results() {
        let provider = Arc::new(CapturingProvider::default());
        let service = NlpService::from_provider(provider);
        let text = "The quick brown fox jumps over the lazy dog near the river bank.";

        let first = service.analyze(&TextRequest::new(text)).await.unwrap();
        let second = service.analyze(&TextRequest::new(text)).await.unwrap();

        assert_eq!(first, second);
    }

    /// Provider whose every capability call fails.
    struct FailingProvider;

    #[async_trait::async_trait]
    impl NlpProvider for FailingProvider {
        async fn summarize(&self, _text: &str, _params: &SummaryParams) -> Result<RawSummary> {
            Err(Error::external_error().with_message("model exploded"))
        }

        async fn extract_entities(&self, _text: &str) -> Result<Vec<RawEntity>> {
            Err(Error::external_error().with_message("model exploded"))
        }

        async fn classify(&self, _text: &str) -> Result<Vec<RawLabel>> {
            Err(Error::external_error().with_message("model exploded"))
        }

        async fn answer(&self, _question: &str, _context: &str) -> Result<RawAnswer> {
            Err(Error::external_error().with_message("model exploded"))
        }

        async fn health_check(&self) -> Result<ServiceHealth> {
            Ok(ServiceHealth::unhealthy("model exploded"))
        }
    }

    #[tokio::test]
    async fn failing_provider_reports_error_and_service_keeps_working() {
        let failing = NlpService::from_provider(FailingProvider);
        let text = "Long enough input that passes the summarization minimum check.";

        let error = failing.summarize(&TextRequest::new(text)).await.unwrap_err();
        assert!(error.to_string().contains("model exploded"));

        let error = failing.analyze(&TextRequest::new(text)).await.unwrap_err();
        assert!(error.to_string().contains("model exploded"));

        // Sentinel paths still short-circuit before the provider and
        // therefore keep succeeding.
        let summary = failing.summarize(&TextRequest::new("short")).await.unwrap();
        assert_eq!(summary.summary, Summary::TOO_SHORT);

        // A fresh request against a healthy provider still succeeds; the
        // shared provider state is not poisoned by the failure.
        let healthy = NlpService::from_provider(Arc::new(CapturingProvider::default()));
        let summary = healthy.summarize(&TextRequest::new(text)).await.unwrap();
        assert_eq!(summary.summary, "captured");
    }
}
