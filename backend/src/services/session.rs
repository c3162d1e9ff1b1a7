//! Session-scoped key-value state
//!
//! The platform's account and session security live elsewhere; this is
//! the minimal per-user store the core needs, currently just the
//! assistant chat log. In-memory, keyed by user id, safe for concurrent
//! requests.

use std::collections::HashMap;
use std::sync::Arc;

use shared::ChatLog;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory per-user session store
#[derive(Clone, Default)]
pub struct SessionStore {
    chat_logs: Arc<RwLock<HashMap<Uuid, ChatLog>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The user's chat log, empty if they have not chatted yet
    pub async fn chat_log(&self, user_id: Uuid) -> ChatLog {
        self.chat_logs
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Append one query/response pair and return the updated log
    pub async fn append_chat(&self, user_id: Uuid, query: String, response: String) -> ChatLog {
        let mut logs = self.chat_logs.write().await;
        let log = logs.entry(user_id).or_default();
        log.append(query, response);
        log.clone()
    }

    /// Remove the user's chat log
    pub async fn clear_chat(&self, user_id: Uuid) {
        self.chat_logs.write().await.remove(&user_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn logs_are_scoped_per_user() {
        let store = SessionStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        store
            .append_chat(alice, "q1".into(), "r1".into())
            .await;

        assert_eq!(store.chat_log(alice).await.len(), 1);
        assert!(store.chat_log(bob).await.is_empty());
    }

    #[tokio::test]
    async fn append_is_ordered_and_clear_resets() {
        let store = SessionStore::new();
        let user = Uuid::new_v4();

        store.append_chat(user, "first".into(), "a".into()).await;
        let log = store.append_chat(user, "second".into(), "b".into()).await;

        assert_eq!(log.queries, vec!["first", "second"]);
        assert_eq!(log.responses, vec!["a", "b"]);

        store.clear_chat(user).await;
        assert!(store.chat_log(user).await.is_empty());
    }
}
