//! In-process conversational memory

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::traits::MemoryStore;

/// In-memory conversation history keyed by conversation id. Stands in for
/// the platform-owned memory store when running locally.
#[derive(Default)]
pub struct ConversationMemory {
    history: Arc<RwLock<HashMap<String, Vec<String>>>>,
}

impl ConversationMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record(&self, conversation_id: &str, line: impl Into<String>) {
        let mut history = self.history.write().await;
        history
            .entry(conversation_id.to_string())
            .or_default()
            .push(line.into());
    }

    pub async fn len(&self) -> usize {
        self.history.read().await.values().map(Vec::len).sum()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl MemoryStore for ConversationMemory {
    async fn clear(&self) {
        let mut history = self.history.write().await;
        history.clear();
        tracing::debug!("conversation memory cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clear_empties_all_conversations() {
        let memory = ConversationMemory::new();
        memory.record("a", "hello").await;
        memory.record("a", "world").await;
        memory.record("b", "hi").await;
        assert_eq!(memory.len().await, 3);

        memory.clear().await;
        assert!(memory.is_empty().await);
    }
}
