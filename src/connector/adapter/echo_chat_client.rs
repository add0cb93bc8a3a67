use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{ChatError, ChatRequest};

/// Offline stand-in for a model: acknowledges the message without answering it.
pub struct EchoChatClient;

impl EchoChatClient {
    pub fn new() -> Self {
        Self
    }

    pub fn reply_for(user_message: &str) -> String {
        format!("You said: {}, but I can't answer that yet.", user_message)
    }
}

impl Default for EchoChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for EchoChatClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String, ChatError> {
        debug!("EchoChatClient: answering without a model");
        Ok(Self::reply_for(request.user_content().unwrap_or_default()))
    }
}
