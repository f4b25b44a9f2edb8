use async_trait::async_trait;

use crate::application::errors::BotError;

/// Outbound messaging seam. Sends are fire-and-forget from the dispatcher's
/// point of view; delivery guarantees belong to the platform behind this.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a message to the current conversation.
    async fn send(&self, text: &str) -> Result<(), BotError>;

    /// Whether an address can be messaged directly on this network.
    async fn is_reachable(&self, address: &str) -> bool;
}

/// Conversational memory owned by the messaging platform.
#[async_trait]
pub trait MemoryStore: Send + Sync {
    async fn clear(&self);
}
