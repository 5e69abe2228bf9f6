//! [`NlpProvider`] implementation for the hosted inference API.
//!
//! Wire types in this module mirror the transformers-pipeline JSON format
//! the API speaks; they are converted into the raw output shapes from
//! `docsense-service` at this boundary and nowhere else.

use docsense_service::nlp::{RawAnswer, RawEntity, RawLabel, RawSummary, SummaryParams};
use docsense_service::{NlpProvider, ServiceHealth};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{HfClient, TRACING_TARGET_CLIENT};

#[derive(Debug, Serialize)]
struct RequestOptions {
    wait_for_model: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            wait_for_model: true,
        }
    }
}

#[derive(Debug, Serialize)]
struct SummarizationBody<'a> {
    inputs: &'a str,
    parameters: SummarizationParameters,
    options: RequestOptions,
}

#[derive(Debug, Serialize)]
struct SummarizationParameters {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
}

#[derive(Debug, Deserialize)]
struct SummarizationResponse {
    summary_text: Option<String>,
}

#[derive(Debug, Serialize)]
struct TokenClassificationBody<'a> {
    inputs: &'a str,
    parameters: TokenClassificationParameters,
    options: RequestOptions,
}

#[derive(Debug, Serialize)]
struct TokenClassificationParameters {
    aggregation_strategy: &'static str,
}

#[derive(Debug, Deserialize)]
struct TokenClassificationResponse {
    entity_group: Option<String>,
    score: Option<f64>,
    word: Option<String>,
    start: Option<i64>,
    end: Option<i64>,
}

#[derive(Debug, Serialize)]
struct TextClassificationBody<'a> {
    inputs: &'a str,
    options: RequestOptions,
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: Option<String>,
    score: Option<f64>,
}

/// The pipeline returns `[[{label, score}, ...]]` for a single input; some
/// deployments flatten the outer list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextClassificationResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl TextClassificationResponse {
    fn into_labels(self) -> Vec<LabelScore> {
        match self {
            Self::Nested(mut nested) => {
                if nested.is_empty() {
                    Vec::new()
                } else {
                    nested.swap_remove(0)
                }
            }
            Self::Flat(labels) => labels,
        }
    }
}

#[derive(Debug, Serialize)]
struct QuestionAnsweringBody<'a> {
    inputs: QuestionAnsweringInputs<'a>,
    options: RequestOptions,
}

#[derive(Debug, Serialize)]
struct QuestionAnsweringInputs<'a> {
    question: &'a str,
    context: &'a str,
}

#[derive(Debug, Deserialize)]
struct QuestionAnsweringResponse {
    answer: Option<String>,
}

fn external(error: crate::Error) -> docsense_service::Error {
    docsense_service::Error::external_error().with_message(error.to_string())
}

#[async_trait::async_trait]
impl NlpProvider for HfClient {
    async fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> docsense_service::Result<RawSummary> {
        let model = &self.config().summarization_model;
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            model = %model,
            text_len = text.len(),
            "Requesting summarization"
        );

        let body = SummarizationBody {
            inputs: text,
            parameters: SummarizationParameters {
                max_length: params.max_length,
                min_length: params.min_length,
                do_sample: params.do_sample,
            },
            options: RequestOptions::default(),
        };

        let result = self
            .call_model::<_, Vec<SummarizationResponse>>(model, &body)
            .await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match result {
            Ok(response) => {
                let summary_text = response.into_iter().next().and_then(|r| r.summary_text);

                tracing::debug!(
                    target: TRACING_TARGET_CLIENT,
                    model = %model,
                    processing_time_ms = elapsed.as_millis(),
                    "Summarization completed"
                );

                Ok(RawSummary { summary_text })
            }
            Err(e) => {
                tracing::error!(
                    target: TRACING_TARGET_CLIENT,
                    model = %model,
                    error = %e,
                    processing_time_ms = elapsed.as_millis(),
                    "Summarization request failed"
                );

                Err(external(e))
            }
        }
    }

    async fn extract_entities(&self, text: &str) -> docsense_service::Result<Vec<RawEntity>> {
        let model = &self.config().ner_model;
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            model = %model,
            text_len = text.len(),
            "Requesting entity extraction"
        );

        let body = TokenClassificationBody {
            inputs: text,
            parameters: TokenClassificationParameters {
                // Merge adjacent sub-tokens into one span per entity.
                aggregation_strategy: "simple",
            },
            options: RequestOptions::default(),
        };

        let result = self
            .call_model::<_, Vec<TokenClassificationResponse>>(model, &body)
            .await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match result {
            Ok(response) => {
                tracing::debug!(
                    target: TRACING_TARGET_CLIENT,
                    model = %model,
                    entity_count = response.len(),
                    processing_time_ms = elapsed.as_millis(),
                    "Entity extraction completed"
                );

                Ok(response
                    .into_iter()
                    .map(|entity| RawEntity {
                        entity_group: entity.entity_group,
                        score: entity.score,
                        word: entity.word,
                        start: entity.start,
                        end: entity.end,
                    })
                    .collect())
            }
            Err(e) => {
                tracing::error!(
                    target: TRACING_TARGET_CLIENT,
                    model = %model,
                    error = %e,
                    processing_time_ms = elapsed.as_millis(),
                    "Entity extraction request failed"
                );

                Err(external(e))
            }
        }
    }

    async fn classify(&self, text: &str) -> docsense_service::Result<Vec<RawLabel>> {
        let model = &self.config().classification_model;
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            model = %model,
            text_len = text.len(),
            "Requesting classification"
        );

        let body = TextClassificationBody {
            inputs: text,
            options: RequestOptions::default(),
        };

        let result = self
            .call_model::<_, TextClassificationResponse>(model, &body)
            .await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match result {
            Ok(response) => {
                let labels = response.into_labels();

                tracing::debug!(
                    target: TRACING_TARGET_CLIENT,
                    model = %model,
                    label_count = labels.len(),
                    processing_time_ms = elapsed.as_millis(),
                    "Classification completed"
                );

                Ok(labels
                    .into_iter()
                    .map(|label| RawLabel {
                        label: label.label,
                        score: label.score,
                    })
                    .collect())
            }
            Err(e) => {
                tracing::error!(
                    target: TRACING_TARGET_CLIENT,
                    model = %model,
                    error = %e,
                    processing_time_ms = elapsed.as_millis(),
                    "Classification request failed"
                );

                Err(external(e))
            }
        }
    }

    async fn answer(&self, question: &str, context: &str) -> docsense_service::Result<RawAnswer> {
        let model = &self.config().qa_model;
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            model = %model,
            context_len = context.len(),
            "Requesting answer"
        );

        let body = QuestionAnsweringBody {
            inputs: QuestionAnsweringInputs { question, context },
            options: RequestOptions::default(),
        };

        let result = self
            .call_model::<_, QuestionAnsweringResponse>(model, &body)
            .await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match result {
            Ok(response) => {
                tracing::debug!(
                    target: TRACING_TARGET_CLIENT,
                    model = %model,
                    processing_time_ms = elapsed.as_millis(),
                    "Answer completed"
                );

                Ok(RawAnswer {
                    answer: response.answer,
                })
            }
            Err(e) => {
                tracing::error!(
                    target: TRACING_TARGET_CLIENT,
                    model = %model,
                    error = %e,
                    processing_time_ms = elapsed.as_millis(),
                    "Answer request failed"
                );

                Err(external(e))
            }
        }
    }

    async fn health_check(&self) -> docsense_service::Result<ServiceHealth> {
        self.health_check()
            .await
            .map(|_| ServiceHealth::healthy())
            .map_err(|e| {
                docsense_service::Error::external_error().with_message(e.to_string())
            })
    }
}
