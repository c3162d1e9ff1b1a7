//! Assistant chat handlers

use axum::{extract::State, Json};
use serde::Deserialize;
use shared::ChatLog;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct AskInput {
    #[validate(length(min = 1, max = 4000))]
    pub query: String,
}

/// Ask the assistant a question; answers with the full updated chat log
pub async fn ask_assistant(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<AskInput>,
) -> AppResult<Json<ChatLog>> {
    input.validate()?;
    let log = state.assistant.ask(current_user.0.id, &input.query).await?;
    Ok(Json(log))
}

/// Current chat log for this session
pub async fn get_chat_log(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> Json<ChatLog> {
    Json(state.assistant.chat_log(current_user.0.id).await)
}

/// Clear the chat log
pub async fn clear_chat_log(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> Json<()> {
    state.assistant.clear_chat_log(current_user.0.id).await;
    Json(())
}
