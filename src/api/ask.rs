//! Ask endpoint handler
//!
//! Validates the inbound request shape, hands the namespaced query text to
//! the pipeline and maps an absent pipeline result to a deterministic
//! "could not answer" body. An absent result is a valid outcome, never a
//! 5xx.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::json::Json;
use crate::api::state::AppState;
use crate::domain::query::QueryTrace;

/// Answer returned when nothing grounded the question
const NO_ANSWER_MESSAGE: &str =
    "No relevant information was found to answer this question.";

/// Tenant whose document namespace the question targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    #[serde(rename = "b2b")]
    B2b,
    #[serde(rename = "b2b-v2")]
    B2bV2,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::B2b => write!(f, "b2b"),
            Self::B2bV2 => write!(f, "b2b-v2"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub provider: Provider,
}

/// Body returned when the pipeline produced no trace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoAnswerResponse {
    pub query: String,
    pub answer: Option<String>,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AskResponse {
    Answered(QueryTrace),
    NoAnswer(NoAnswerResponse),
}

/// POST /ask
pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let request_id = Uuid::new_v4();

    if request.question.trim().is_empty() {
        return Err(ApiError::bad_request("Question cannot be empty").with_param("question"));
    }

    info!(
        request_id = %request_id,
        provider = %request.provider,
        "processing ask request"
    );

    let query_text = build_query_text(request.provider, &request.question);

    let response = match state.pipeline.ask(&query_text).await {
        Some(trace) => AskResponse::Answered(trace),
        None => AskResponse::NoAnswer(NoAnswerResponse {
            query: query_text,
            answer: None,
            message: NO_ANSWER_MESSAGE.to_string(),
        }),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Prefix the tenant tag so passages are retrieved within its namespace
fn build_query_text(provider: Provider, question: &str) -> String {
    format!("[{}] {}", provider, question)
}
