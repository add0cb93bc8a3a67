pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ChatClient, ChatExchange, ChatHistoryRepository, ChatHistoryUseCase, FailurePolicy,
    LlmService, RelayChatUseCase, MAX_TOKENS, TEMPERATURE,
};

pub use cli::Commands;

pub use connector::{
    Container, ContainerConfig, DuckdbChatHistoryRepository, EchoChatClient,
    InMemoryChatHistoryRepository, OpenAiChatClient, Router,
};

pub use domain::{
    ChatError, ChatErrorKind, ChatHistoryRecord, ChatMessage, ChatRequest, ChatRole, DomainError,
    EndpointProfile, LlmServiceConfig, PromptSource,
};
