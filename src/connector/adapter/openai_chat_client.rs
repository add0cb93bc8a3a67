use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{ChatError, ChatRequest, DomainError, LlmServiceConfig};

const COMPLETIONS_PATH: &str = "/chat/completions";

/// OpenAI chat-completions request payload.
#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the chat-completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// HTTP client for OpenAI-compatible chat-completion endpoints: the cloud
/// gateway as well as local servers such as LM Studio or llama.cpp.
///
/// The base URL is expected to include the API version prefix
/// (`https://llm.api.cloud.yandex.net/v1`, `http://localhost:1234/v1`); the
/// client appends `/chat/completions`. When an API key is configured it is
/// sent as a bearer token, otherwise no `Authorization` header is sent.
pub struct OpenAiChatClient {
    client: reqwest::Client,
    api_key: Option<String>,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenAiChatClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.filter(|k| !k.is_empty()),
            url,
        })
    }

    pub fn from_config(config: &LlmServiceConfig) -> Result<Self, DomainError> {
        Self::new(
            config.base_url(),
            config.api_key().map(str::to_string),
            config.request_timeout(),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn classify(e: reqwest::Error) -> ChatError {
        let detail = error_chain(&e);
        if e.is_timeout() {
            ChatError::timeout(detail)
        } else if e.is_decode() {
            ChatError::malformed(detail)
        } else {
            ChatError::transport(detail)
        }
    }
}

/// Render an error with its source chain; reqwest keeps the useful part
/// (e.g. "Connection refused") in the sources.
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut text = e.to_string();
    let mut source = e.source();
    while let Some(inner) = source {
        text.push_str(": ");
        text.push_str(&inner.to_string());
        source = inner.source();
    }
    text
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String, ChatError> {
        let api_request = ApiRequest {
            model: request.model(),
            messages: request
                .messages()
                .iter()
                .map(|m| ApiMessage {
                    role: m.role().as_str(),
                    content: m.content(),
                })
                .collect(),
            temperature: request.temperature(),
            max_tokens: request.max_tokens(),
        };

        let mut builder = self.client.post(&self.url).json(&api_request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        debug!("OpenAiChatClient: POST {} model {}", self.url, request.model());
        let response = builder.send().await.map_err(Self::classify)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAiChatClient: API returned {status}: {body}");
            return Err(ChatError::from_status(status.as_u16(), body));
        }

        let text = response.text().await.map_err(Self::classify)?;
        let api_response: ApiResponse = serde_json::from_str(&text)
            .map_err(|e| ChatError::malformed(format!("failed to parse response: {}", e)))?;

        api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ChatError::malformed("response contained no choices"))?
            .message
            .content
            .ok_or_else(|| ChatError::malformed("first choice has no message content"))
    }
}
