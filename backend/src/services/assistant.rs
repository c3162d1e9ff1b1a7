//! Conversational assistant service
//!
//! One synchronous generative-AI call per question. Conversation history
//! is appended to the caller's session-scoped chat log so a page render
//! can show the full exchange.

use shared::ChatLog;
use uuid::Uuid;

use crate::error::AppResult;
use crate::external::GeminiClient;
use crate::services::session::SessionStore;

/// Assistant service
#[derive(Clone)]
pub struct AssistantService {
    gemini: GeminiClient,
    sessions: SessionStore,
}

impl AssistantService {
    pub fn new(gemini: GeminiClient, sessions: SessionStore) -> Self {
        Self { gemini, sessions }
    }

    /// Ask the assistant a question and record the exchange.
    ///
    /// Fails with `AssistantUnavailable` when the endpoint is down; the
    /// log is only appended after a successful reply so queries and
    /// responses stay index-paired.
    pub async fn ask(&self, user_id: Uuid, query: &str) -> AppResult<ChatLog> {
        let response = self.gemini.generate_text(query).await?;
        Ok(self
            .sessions
            .append_chat(user_id, query.to_string(), response)
            .await)
    }

    /// Current chat log for the user's session
    pub async fn chat_log(&self, user_id: Uuid) -> ChatLog {
        self.sessions.chat_log(user_id).await
    }

    /// Clear the user's chat log (session reset)
    pub async fn clear_chat_log(&self, user_id: Uuid) {
        self.sessions.clear_chat(user_id).await;
    }
}
