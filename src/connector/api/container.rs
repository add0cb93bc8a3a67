use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{ChatClient, ChatHistoryRepository};
use crate::{
    ChatHistoryUseCase, DuckdbChatHistoryRepository, EchoChatClient, FailurePolicy,
    InMemoryChatHistoryRepository, LlmService, LlmServiceConfig, OpenAiChatClient,
    RelayChatUseCase,
};

pub struct ContainerConfig {
    pub data_dir: String,
    /// Keep chat history in memory for the lifetime of the process only.
    pub memory_storage: bool,
    /// Answer with the offline echo client instead of calling an endpoint.
    pub mock_llm: bool,
    /// Store failed exchanges, with the error text as the reply.
    pub persist_failures: bool,
    pub llm: LlmServiceConfig,
}

pub struct Container {
    llm_service: Arc<LlmService>,
    history_repo: Arc<dyn ChatHistoryRepository>,
    config: ContainerConfig,
}

impl Container {
    pub async fn new(config: ContainerConfig) -> Result<Self> {
        let client: Arc<dyn ChatClient> = if config.mock_llm {
            debug!("Using echo chat client");
            Arc::new(EchoChatClient::new())
        } else {
            debug!("Using chat-completion endpoint at {}", config.llm.base_url());
            Arc::new(OpenAiChatClient::from_config(&config.llm)?)
        };

        let llm_service = Arc::new(LlmService::from_config(&config.llm, client)?);

        let history_repo: Arc<dyn ChatHistoryRepository> = if config.memory_storage {
            debug!("Using in-memory chat history");
            Arc::new(InMemoryChatHistoryRepository::new())
        } else {
            std::fs::create_dir_all(&config.data_dir)?;
            let db_path = PathBuf::from(&config.data_dir).join("chatrelay.duckdb");
            debug!("Using DuckDB chat history at {:?}", db_path);
            Arc::new(DuckdbChatHistoryRepository::new(&db_path)?)
        };

        Ok(Self {
            llm_service,
            history_repo,
            config,
        })
    }

    pub fn relay_use_case(&self) -> RelayChatUseCase {
        let policy = if self.config.persist_failures {
            FailurePolicy::Persist
        } else {
            FailurePolicy::Drop
        };

        RelayChatUseCase::new(self.llm_service.clone())
            .with_history(self.history_repo.clone())
            .with_failure_policy(policy)
    }

    pub fn history_use_case(&self) -> ChatHistoryUseCase {
        ChatHistoryUseCase::new(self.history_repo.clone())
    }

    pub fn llm_service(&self) -> Arc<LlmService> {
        self.llm_service.clone()
    }

    pub fn data_dir(&self) -> &str {
        &self.config.data_dir
    }

    pub fn memory_storage(&self) -> bool {
        self.config.memory_storage
    }
}
