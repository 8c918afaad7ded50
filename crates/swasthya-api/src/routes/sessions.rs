use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use swasthya_core::models::chat_history::{ChatHistoryMessage, ChatSession};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    messages: Vec<ChatHistoryMessage>,
    #[serde(default)]
    session_id: Option<Uuid>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    session_id: Option<Uuid>,
}

pub async fn list_sessions(State(state): State<AppState>) -> Json<Vec<ChatSession>> {
    let history = state.history.lock().await;
    Json(history.sessions().to_vec())
}

pub async fn get_session(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<ChatSession>, ApiError> {
    let Path(id) = id?;
    let history = state.history.lock().await;
    history
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))
}

pub async fn save_session(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, ApiError> {
    let Json(request) = payload?;
    let session_id = state
        .with_history(move |history| history.save_chat(request.messages, request.session_id))
        .await??;
    Ok(Json(SaveResponse { session_id }))
}

pub async fn delete_session(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    if state.with_history(move |history| history.delete_chat(id)).await?? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("session not found: {id}")))
    }
}

pub async fn clear_sessions(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.with_history(|history| history.clear()).await??;
    Ok(StatusCode::NO_CONTENT)
}
