use std::sync::Arc;

use tracing::{debug, error};

use crate::application::ChatClient;
use crate::domain::{ChatError, ChatMessage, ChatRequest, DomainError, LlmServiceConfig};

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f32 = 1.0;
/// Upper bound on the reply length, in tokens.
pub const MAX_TOKENS: u32 = 1024;

/// Wraps one chat-completion call: a fixed system prompt plus the user's message.
///
/// The service is immutable after construction and holds no per-call state, so a
/// single instance can be shared behind an `Arc` by every request handler.
pub struct LlmService {
    client: Arc<dyn ChatClient>,
    system_prompt: String,
    model: String,
}

impl LlmService {
    pub fn new(
        client: Arc<dyn ChatClient>,
        system_prompt: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            system_prompt: system_prompt.into(),
            model: model.into(),
        }
    }

    /// Build a service from `config`, resolving the prompt source once.
    ///
    /// Fails when the prompt file cannot be read.
    pub fn from_config(
        config: &LlmServiceConfig,
        client: Arc<dyn ChatClient>,
    ) -> Result<Self, DomainError> {
        let system_prompt = config.prompt().load()?;
        debug!(
            "LlmService: model {} with {}-char system prompt",
            config.model(),
            system_prompt.chars().count()
        );
        Ok(Self::new(client, system_prompt, config.model()))
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// The exact request sent for `user_message`: system prompt first, then the user turn.
    pub fn build_request(&self, user_message: &str) -> ChatRequest {
        ChatRequest::new(
            self.model.clone(),
            vec![
                ChatMessage::system(self.system_prompt.clone()),
                ChatMessage::user(user_message),
            ],
            TEMPERATURE,
            MAX_TOKENS,
        )
    }

    /// Send `user_message` to the model and return its reply.
    ///
    /// Every failure is logged at error level with the same text that
    /// [`ChatError::to_reply_text`] produces.
    pub async fn chat(&self, user_message: &str) -> Result<String, ChatError> {
        let request = self.build_request(user_message);

        match self.client.complete(&request).await {
            Ok(reply) => {
                debug!("LlmService: received {} chars from {}", reply.len(), self.model);
                Ok(reply)
            }
            Err(e) => {
                error!(kind = e.kind().as_str(), "An error occurred: {e}");
                Err(e)
            }
        }
    }

    /// Like [`Self::chat`], but renders a failure as reply text.
    pub async fn chat_text(&self, user_message: &str) -> String {
        match self.chat(user_message).await {
            Ok(reply) => reply,
            Err(e) => e.to_reply_text(),
        }
    }
}
