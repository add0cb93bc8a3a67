use std::sync::Arc;

use crate::application::ChatHistoryRepository;
use crate::domain::{ChatHistoryRecord, DomainError};

pub struct ChatHistoryUseCase {
    history_repo: Arc<dyn ChatHistoryRepository>,
}

impl ChatHistoryUseCase {
    pub fn new(history_repo: Arc<dyn ChatHistoryRepository>) -> Self {
        Self { history_repo }
    }

    pub async fn list_recent(&self, limit: usize) -> Result<Vec<ChatHistoryRecord>, DomainError> {
        self.history_repo.list_recent(limit).await
    }

    pub async fn get(&self, id: i64) -> Result<ChatHistoryRecord, DomainError> {
        self.history_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Chat exchange #{}", id)))
    }

    pub async fn count(&self) -> Result<u64, DomainError> {
        self.history_repo.count().await
    }
}
