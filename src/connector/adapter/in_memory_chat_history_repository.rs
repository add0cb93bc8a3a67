use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::{validate_user_message, ChatHistoryRepository};
use crate::domain::{ChatHistoryRecord, DomainError};

pub struct InMemoryChatHistoryRepository {
    records: Arc<Mutex<Vec<ChatHistoryRecord>>>,
}

impl InMemoryChatHistoryRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Default for InMemoryChatHistoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatHistoryRepository for InMemoryChatHistoryRepository {
    async fn insert(
        &self,
        user_message: &str,
        llm_reply: &str,
    ) -> Result<ChatHistoryRecord, DomainError> {
        validate_user_message(user_message)?;

        let mut records = self.records.lock().await;
        let id = records.last().map_or(1, |r| r.id() + 1);
        let record = ChatHistoryRecord::new(
            id,
            user_message.to_string(),
            llm_reply.to_string(),
            Utc::now(),
        );
        records.push(record.clone());

        debug!("Stored chat exchange #{} in memory", id);
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ChatHistoryRecord>, DomainError> {
        let records = self.records.lock().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<ChatHistoryRecord>, DomainError> {
        let records = self.records.lock().await;
        Ok(records.iter().rev().take(limit).cloned().collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.records.lock().await.len() as u64)
    }
}
