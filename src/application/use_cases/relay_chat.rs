use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{ChatHistoryRepository, LlmService};
use crate::domain::{ChatError, ChatHistoryRecord, DomainError};

/// What to do with an exchange whose chat call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Keep failures out of the history.
    #[default]
    Drop,
    /// Store the rendered error text as the reply.
    Persist,
}

/// Result of relaying one message: the chat outcome and, if stored, its record.
#[derive(Debug, Clone)]
pub struct ChatExchange {
    outcome: Result<String, ChatError>,
    record: Option<ChatHistoryRecord>,
}

impl ChatExchange {
    pub fn new(outcome: Result<String, ChatError>, record: Option<ChatHistoryRecord>) -> Self {
        Self { outcome, record }
    }

    pub fn outcome(&self) -> &Result<String, ChatError> {
        &self.outcome
    }

    pub fn reply(&self) -> Option<&str> {
        self.outcome.as_deref().ok()
    }

    pub fn error(&self) -> Option<&ChatError> {
        self.outcome.as_ref().err()
    }

    pub fn record(&self) -> Option<&ChatHistoryRecord> {
        self.record.as_ref()
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Reply text, or the rendered error in its place.
    pub fn display_text(&self) -> String {
        match &self.outcome {
            Ok(reply) => reply.clone(),
            Err(e) => e.to_reply_text(),
        }
    }
}

pub struct RelayChatUseCase {
    llm_service: Arc<LlmService>,
    history_repo: Option<Arc<dyn ChatHistoryRepository>>,
    failure_policy: FailurePolicy,
}

impl RelayChatUseCase {
    pub fn new(llm_service: Arc<LlmService>) -> Self {
        Self {
            llm_service,
            history_repo: None,
            failure_policy: FailurePolicy::default(),
        }
    }

    pub fn with_history(mut self, history_repo: Arc<dyn ChatHistoryRepository>) -> Self {
        self.history_repo = Some(history_repo);
        self
    }

    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    pub async fn execute(&self, message: &str) -> Result<ChatExchange, DomainError> {
        if message.trim().is_empty() {
            return Err(DomainError::invalid_input("Message must not be empty"));
        }

        let outcome = self.llm_service.chat(message).await;

        let Some(repo) = self.history_repo.as_ref() else {
            return Ok(ChatExchange::new(outcome, None));
        };

        let record = match (&outcome, self.failure_policy) {
            (Ok(reply), _) => Some(repo.insert(message, reply).await?),
            (Err(e), FailurePolicy::Persist) => {
                Some(repo.insert(message, &e.to_reply_text()).await?)
            }
            (Err(e), FailurePolicy::Drop) => {
                debug!("Not persisting failed exchange ({})", e.kind().as_str());
                None
            }
        };

        if let Some(record) = &record {
            info!("Stored chat exchange #{}", record.id());
        }

        Ok(ChatExchange::new(outcome, record))
    }
}
