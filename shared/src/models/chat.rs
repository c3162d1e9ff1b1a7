//! Assistant chat models

use serde::{Deserialize, Serialize};

/// Append-only conversation history for one user session.
///
/// Index `i` in `queries` pairs with index `i` in `responses`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChatLog {
    pub queries: Vec<String>,
    pub responses: Vec<String>,
}

impl ChatLog {
    /// Append one query/response pair, keeping the indices aligned.
    pub fn append(&mut self, query: String, response: String) {
        self.queries.push(query);
        self.responses.push(response);
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}
