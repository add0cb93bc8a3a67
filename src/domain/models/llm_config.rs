use std::path::PathBuf;
use std::time::Duration;

use crate::domain::DomainError;

/// OpenAI-compatible gateway of the cloud provider.
pub const CLOUD_BASE_URL: &str = "https://llm.api.cloud.yandex.net/v1";
pub const CLOUD_MODEL_NAME: &str = "yandexgpt-lite";
/// Default local target: LM Studio on its standard port.
pub const DEFAULT_LOCAL_BASE_URL: &str = "http://localhost:1234/v1";
pub const DEFAULT_LOCAL_MODEL: &str = "local-model";
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Where the system prompt comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSource {
    Text(String),
    File(PathBuf),
}

impl PromptSource {
    /// Resolve the prompt text. Files are read exactly once, here.
    pub fn load(&self) -> Result<String, DomainError> {
        match self {
            PromptSource::Text(text) => Ok(text.clone()),
            PromptSource::File(path) => std::fs::read_to_string(path).map_err(|e| {
                DomainError::config(format!(
                    "Failed to read system prompt from {}: {}",
                    path.display(),
                    e
                ))
            }),
        }
    }
}

/// The two endpoint shapes the relay knows how to talk to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointProfile {
    /// Cloud gateway: needs an API key, and the folder id is part of the model URI.
    Cloud { api_key: String, folder_id: String },
    /// Local inference server: no credential, plain model name.
    Local { base_url: String, model: String },
}

impl EndpointProfile {
    pub fn base_url(&self) -> &str {
        match self {
            EndpointProfile::Cloud { .. } => CLOUD_BASE_URL,
            EndpointProfile::Local { base_url, .. } => base_url,
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        match self {
            EndpointProfile::Cloud { api_key, .. } => Some(api_key),
            EndpointProfile::Local { .. } => None,
        }
    }

    pub fn model(&self) -> String {
        match self {
            EndpointProfile::Cloud { folder_id, .. } => {
                format!("gpt://{}/{}", folder_id, CLOUD_MODEL_NAME)
            }
            EndpointProfile::Local { model, .. } => model.clone(),
        }
    }
}

/// Everything needed to build an [`crate::application::LlmService`] and its client.
#[derive(Debug, Clone)]
pub struct LlmServiceConfig {
    base_url: String,
    api_key: Option<String>,
    model: String,
    prompt: PromptSource,
    request_timeout: Duration,
}

impl LlmServiceConfig {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, prompt: PromptSource) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            model: model.into(),
            prompt,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn from_profile(profile: &EndpointProfile, prompt: PromptSource) -> Self {
        let config = Self::new(profile.base_url(), profile.model(), prompt);
        match profile.api_key() {
            Some(key) => config.with_api_key(key),
            None => config,
        }
    }

    /// Construct from environment variables:
    ///
    /// | Variable             | Default                    | Purpose                        |
    /// |----------------------|----------------------------|--------------------------------|
    /// | `CHATRELAY_PROVIDER` | `local`                    | `cloud` or `local`             |
    /// | `YA_API_KEY`         | required for `cloud`       | Cloud credential               |
    /// | `YA_FOLDER_ID`       | required for `cloud`       | Folder id in the model URI     |
    /// | `LOCAL_MODEL`        | `local-model`              | Model served locally           |
    /// | `LOCAL_BASE_URL`     | `http://localhost:1234/v1` | Local server                   |
    /// | `SYSTEM_PROMPT_PATH` | unset                      | File holding the system prompt |
    /// | `SYSTEM_PROMPT`      | built-in prompt            | Literal prompt                 |
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`Self::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let provider = var("CHATRELAY_PROVIDER").unwrap_or_else(|| "local".to_string());
        let profile = match provider.to_lowercase().as_str() {
            "cloud" => EndpointProfile::Cloud {
                api_key: var("YA_API_KEY")
                    .ok_or_else(|| DomainError::config("YA_API_KEY is required for the cloud provider"))?,
                folder_id: var("YA_FOLDER_ID")
                    .ok_or_else(|| DomainError::config("YA_FOLDER_ID is required for the cloud provider"))?,
            },
            "local" => EndpointProfile::Local {
                base_url: var("LOCAL_BASE_URL").unwrap_or_else(|| DEFAULT_LOCAL_BASE_URL.to_string()),
                model: var("LOCAL_MODEL").unwrap_or_else(|| DEFAULT_LOCAL_MODEL.to_string()),
            },
            other => {
                return Err(DomainError::config(format!(
                    "Unknown provider '{}', expected 'cloud' or 'local'",
                    other
                )))
            }
        };

        let prompt = match var("SYSTEM_PROMPT_PATH") {
            Some(path) => PromptSource::File(PathBuf::from(path)),
            None => PromptSource::Text(
                var("SYSTEM_PROMPT").unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            ),
        };

        Ok(Self::from_profile(&profile, prompt))
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn prompt(&self) -> &PromptSource {
        &self.prompt
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}
