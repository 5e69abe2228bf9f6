//! Question-answering handlers for the ask and chat operations.
//!
//! The two endpoints share one contract; they differ only in the sentinel
//! returned when the question or context is missing.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use docsense_service::NlpService;
use docsense_service::nlp::Answer;

use crate::handler::Result;
use crate::handler::request::QaBody;
use crate::service::ServiceState;

/// Tracing target for question-answering operations.
const TRACING_TARGET: &str = "docsense_server::handler::chat";

/// Answers a question against the submitted context.
#[tracing::instrument(skip_all)]
async fn ask(
    State(nlp_service): State<NlpService>,
    Json(body): Json<QaBody>,
) -> Result<Json<Answer>> {
    tracing::debug!(
        target: TRACING_TARGET,
        context_len = body.context.len(),
        "Answer requested"
    );

    let request = body.into_request();
    let answer = nlp_service.answer(&request).await?;

    Ok(Json(answer))
}

/// Answers a chat question against the submitted context.
#[tracing::instrument(skip_all)]
async fn chat(
    State(nlp_service): State<NlpService>,
    Json(body): Json<QaBody>,
) -> Result<Json<Answer>> {
    tracing::debug!(
        target: TRACING_TARGET,
        context_len = body.context.len(),
        "Chat answer requested"
    );

    let request = body.into_request();
    let answer = nlp_service.chat(&request).await?;

    Ok(Json(answer))
}

/// Returns a [`Router`] with all question-answering routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/ask", post(ask))
        .route("/chat", post(chat))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use docsense_service::MockProvider;
    use docsense_service::nlp::Answer;
    use serde_json::{Value, json};

    use crate::handler::test::{create_test_server, mock_server};

    #[tokio::test]
    async fn ask_missing_question_returns_sentinel() {
        let server = mock_server();

        let response = server
            .post("/ask")
            .json(&json!({"context": "Some document.", "question": "  "}))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["answer"], Answer::MISSING_QUESTION_OR_CONTEXT);
    }

    #[tokio::test]
    async fn ask_missing_context_returns_sentinel() {
        let server = mock_server();

        let response = server
            .post("/ask")
            .json(&json!({"context": "", "question": "What is this?"}))
            .await;

        let body: Value = response.json();
        assert_eq!(body["answer"], Answer::MISSING_QUESTION_OR_CONTEXT);
    }

    #[tokio::test]
    async fn chat_missing_input_returns_its_own_sentinel() {
        let server = mock_server();

        let response = server
            .post("/chat")
            .json(&json!({"context": "", "question": ""}))
            .await;

        let body: Value = response.json();
        assert_eq!(body["answer"], Answer::MISSING_INPUT);
    }

    #[tokio::test]
    async fn ask_returns_provider_answer() {
        let server = create_test_server(MockProvider::with_answer("Paragraph 4.").into_service());

        let response = server
            .post("/ask")
            .json(&json!({
                "context": "The termination clause is described in paragraph 4.",
                "question": "Where is the termination clause?"
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["answer"], "Paragraph 4.");
    }

    #[tokio::test]
    async fn chat_failure_becomes_error_payload() {
        let server = create_test_server(MockProvider::failing("qa model offline").into_service());

        let response = server
            .post("/chat")
            .json(&json!({"context": "Some document.", "question": "What is this?"}))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("qa model offline"));
    }
}
