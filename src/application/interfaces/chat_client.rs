use async_trait::async_trait;

use crate::domain::{ChatError, ChatRequest};

/// An interface for sending a chat-completion request to an LLM endpoint and
/// receiving the reply text.
///
/// Implementors encapsulate transport, serialization and vendor-specific API
/// details. [`crate::application::LlmService`] builds the request; the client only
/// delivers it.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send `request` and return the content of the first completion choice.
    async fn complete(&self, request: &ChatRequest) -> Result<String, ChatError>;
}
