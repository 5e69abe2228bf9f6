//! Document analysis handlers: summarization, NER, classification, and the
//! combined analyze operation.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use docsense_service::NlpService;
use docsense_service::nlp::{DocumentAnalysis, Summary};

use crate::handler::Result;
use crate::handler::request::TextBody;
use crate::handler::response::{ClassificationResponse, EntitiesResponse};
use crate::service::ServiceState;

/// Tracing target for analysis operations.
const TRACING_TARGET: &str = "docsense_server::handler::analysis";

/// Summarizes the submitted document text.
#[tracing::instrument(skip_all)]
async fn summarize(
    State(nlp_service): State<NlpService>,
    Json(body): Json<TextBody>,
) -> Result<Json<Summary>> {
    tracing::debug!(
        target: TRACING_TARGET,
        text_len = body.text.len(),
        "Summarize requested"
    );

    let request = body.into_request();
    let summary = nlp_service.summarize(&request).await?;

    Ok(Json(summary))
}

/// Extracts named entities from the submitted document text.
#[tracing::instrument(skip_all)]
async fn extract_entities(
    State(nlp_service): State<NlpService>,
    Json(body): Json<TextBody>,
) -> Result<Json<EntitiesResponse>> {
    tracing::debug!(
        target: TRACING_TARGET,
        text_len = body.text.len(),
        "Entity extraction requested"
    );

    let request = body.into_request();
    let entities = nlp_service.extract_entities(&request).await?;

    Ok(Json(EntitiesResponse { entities }))
}

/// Classifies the submitted document text.
#[tracing::instrument(skip_all)]
async fn classify(
    State(nlp_service): State<NlpService>,
    Json(body): Json<TextBody>,
) -> Result<Json<ClassificationResponse>> {
    tracing::debug!(
        target: TRACING_TARGET,
        text_len = body.text.len(),
        "Classification requested"
    );

    let request = body.into_request();
    let classification = nlp_service.classify(&request).await?;

    Ok(Json(ClassificationResponse { classification }))
}

/// Runs the combined document analysis.
#[tracing::instrument(skip_all)]
async fn analyze(
    State(nlp_service): State<NlpService>,
    Json(body): Json<TextBody>,
) -> Result<Json<DocumentAnalysis>> {
    tracing::debug!(
        target: TRACING_TARGET,
        text_len = body.text.len(),
        "Document analysis requested"
    );

    let request = body.into_request();
    let analysis = nlp_service.analyze(&request).await?;

    Ok(Json(analysis))
}

/// Returns a [`Router`] with all analysis routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/summarize", post(summarize))
        .route("/ner", post(extract_entities))
        .route("/classify", post(classify))
        .route("/analyze", post(analyze))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use docsense_service::nlp::Summary;
    use docsense_service::{MockConfig, MockProvider, NlpService};
    use serde_json::{Value, json};

    use crate::handler::test::{create_test_server, mock_server};

    #[tokio::test]
    async fn summarize_short_text_returns_sentinel() {
        let server = mock_server();

        let response = server
            .post("/summarize")
            .json(&json!({"text": "tiny input"}))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["summary"], Summary::TOO_SHORT);
    }

    #[tokio::test]
    async fn summarize_returns_summary_payload() {
        let server = create_test_server(
            MockProvider::with_summary("A concise summary.").into_service(),
        );

        let response = server
            .post("/summarize")
            .json(&json!({"text": "An input comfortably longer than the thirty character minimum."}))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["summary"], "A concise summary.");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn ner_empty_text_returns_empty_entities() {
        let server = mock_server();

        let response = server.post("/ner").json(&json!({"text": ""})).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["entities"], json!([]));
    }

    #[tokio::test]
    async fn ner_offsets_stay_within_truncated_text() {
        let server = mock_server();

        // One 1600-character word; the normalizer cuts it to 1500 before the
        // provider sees it, so the span must end within that prefix.
        let text = "w".repeat(1600);
        let response = server.post("/ner").json(&json!({ "text": text })).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        let entities = body["entities"].as_array().unwrap();
        assert_eq!(entities.len(), 1);

        let start = entities[0]["start"].as_u64().unwrap();
        let end = entities[0]["end"].as_u64().unwrap();
        assert!(start <= end);
        assert!(end <= 1500);
    }

    #[tokio::test]
    async fn classify_empty_text_returns_empty_classification() {
        let server = mock_server();

        let response = server.post("/classify").json(&json!({"text": "  "})).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["classification"], json!([]));
    }

    #[tokio::test]
    async fn classify_title_cases_the_label() {
        let server = create_test_server(MockProvider::with_label("very_happy").into_service());

        let response = server
            .post("/classify")
            .json(&json!({"text": "A short clause."}))
            .await;

        let body: Value = response.json();
        let entries = body["classification"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["riskLevel"], "Very_Happy");
        assert_eq!(entries[0]["clause"], "A short clause.");
    }

    #[tokio::test]
    async fn analyze_empty_text_returns_error_payload() {
        let server = mock_server();

        let response = server.post("/analyze").json(&json!({"text": ""})).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        let error = body["error"].as_str().unwrap();
        assert!(!error.is_empty());
        assert!(error.contains("No text provided for analysis."));
    }

    #[tokio::test]
    async fn analyze_clause_is_prefix_of_normalized_text() {
        let server = mock_server();

        let text = "m".repeat(3200);
        let response = server.post("/analyze").json(&json!({ "text": text })).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();

        // All three capability results are merged into one payload.
        assert!(body["summary"].is_string());
        assert!(body["entities"].is_array());

        let entries = body["classification"].as_array().unwrap();
        assert!(!entries.is_empty());
        for entry in entries {
            assert_eq!(entry["clause"], "m".repeat(100));
        }
    }

    #[tokio::test]
    async fn failing_provider_yields_error_and_server_keeps_serving() {
        let server = create_test_server(MockProvider::failing("inference backend down").into_service());

        let text = "An input comfortably longer than the thirty character minimum.";
        let response = server.post("/analyze").json(&json!({ "text": text })).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("inference backend down"));

        // Sentinel paths never reach the provider, so the same server keeps
        // answering subsequent requests.
        let response = server
            .post("/summarize")
            .json(&json!({"text": "short"}))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["summary"], Summary::TOO_SHORT);
    }

    #[tokio::test]
    async fn identical_requests_yield_identical_payloads() {
        let server = create_test_server(NlpService::mock_with_config(MockConfig {
            mock_summary: Some("Stable summary.".to_owned()),
            ..Default::default()
        }));

        let body = json!({"text": "A document whose analysis must be reproducible across calls."});

        let first: Value = server.post("/analyze").json(&body).await.json();
        let second: Value = server.post("/analyze").json(&body).await.json();

        assert_eq!(first, second);
    }
}
