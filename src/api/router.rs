use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::ask;
use super::health;
use super::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ask", post(ask::ask))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::embedding::MockEmbeddingProvider;
    use crate::domain::generation::MockGenerationProvider;
    use crate::domain::query::RetrievalConfig;
    use crate::domain::vector_store::{MockVectorStore, SearchHit};
    use crate::infrastructure::QueryPipeline;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(store: MockVectorStore) -> Router {
        let pipeline = QueryPipeline::new(
            Arc::new(MockEmbeddingProvider::new("test-embed")),
            Arc::new(store),
            Arc::new(MockGenerationProvider::new("test-llm").with_output("the answer")),
            RetrievalConfig::default(),
        );

        create_router(AppState::new(Arc::new(pipeline)))
    }

    fn ask_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/ask")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = app(MockVectorStore::new());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "up");
    }

    #[tokio::test]
    async fn test_ask_answers_with_trace() {
        let hits = vec![SearchHit::new(Some(0.3))
            .with_text("A passage long enough to ground an answer with")
            .with_doc_title("doc.pdf")
            .with_page_number(3)];
        let app = app(MockVectorStore::new().with_hits(hits));

        let response = app
            .oneshot(ask_request(json!({
                "question": "why was I charged twice?",
                "provider": "b2b",
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["query"], "[b2b] why was I charged twice?");
        assert_eq!(json["citations"][0]["source"]["document"], "doc.pdf");
        assert_eq!(json["citations"][0]["source"]["pageNumber"], 3);
        assert_eq!(json["llmResponse"]["model"], "test-llm");
        assert_eq!(json["llmResponse"]["output"], "the answer");
    }

    #[tokio::test]
    async fn test_ask_maps_absent_result_to_no_answer_body() {
        // Nothing in the store, so the pipeline produces no trace
        let app = app(MockVectorStore::new());

        let response = app
            .oneshot(ask_request(json!({
                "question": "anything at all?",
                "provider": "b2b-v2",
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["answer"].is_null());
        assert_eq!(json["query"], "[b2b-v2] anything at all?");
        assert!(json["message"].as_str().unwrap().contains("No relevant"));
    }

    #[tokio::test]
    async fn test_ask_rejects_empty_question() {
        let app = app(MockVectorStore::new());

        let response = app
            .oneshot(ask_request(json!({
                "question": "   ",
                "provider": "b2b",
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["type"], "invalid_request_error");
        assert_eq!(json["error"]["param"], "question");
    }

    #[tokio::test]
    async fn test_ask_rejects_unknown_provider() {
        let app = app(MockVectorStore::new());

        let response = app
            .oneshot(ask_request(json!({
                "question": "a question",
                "provider": "b2c",
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["error"]["type"], "invalid_request_error");
    }

    #[tokio::test]
    async fn test_ask_rejects_missing_question_field() {
        let app = app(MockVectorStore::new());

        let response = app
            .oneshot(ask_request(json!({ "provider": "b2b" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_ask_dependency_failure_still_answers_deterministically() {
        let app = app(MockVectorStore::new().with_connect_error("weaviate unreachable"));

        let response = app
            .oneshot(ask_request(json!({
                "question": "a question",
                "provider": "b2b",
            })))
            .await
            .unwrap();

        // Downstream failure collapses to the same no-answer outcome
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["answer"].is_null());
    }
}
