use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use swasthya_assistant::ChatMessage;
use swasthya_core::lang::Language;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    message: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    conversation_history: Vec<ChatMessage>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    response: String,
}

/// Unknown or missing languages fall back to English.
fn language_of(raw: Option<&str>) -> Language {
    raw.and_then(|l| l.parse().ok()).unwrap_or_default()
}

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload?;

    let message = request.message.trim();
    if message.is_empty() {
        return Err(ApiError::BadRequest("message is required".to_string()));
    }

    let language = language_of(request.language.as_deref());
    let response = state
        .relay
        .send(message, language, &request.conversation_history)
        .await;

    Ok(Json(ChatResponse { response }))
}
