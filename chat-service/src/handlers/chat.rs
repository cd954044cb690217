use crate::dtos::{ChatRequest, ChatResponse};
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use service_core::error::AppError;

/// `POST /chat` - forward one user message to the model provider.
///
/// Validation happens before any provider contact; a missing or empty
/// message never creates a session or reaches the model.
pub async fn post_chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<impl IntoResponse, AppError> {
    let message = body.message.unwrap_or_default();
    if message.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!("Message is required")));
    }

    let reply = state
        .orchestrator
        .respond(body.session_id.as_deref(), &message)
        .await?;

    Ok(Json(ChatResponse { message: reply }))
}
