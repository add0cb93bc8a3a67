use async_trait::async_trait;

use crate::domain::{ChatHistoryRecord, DomainError};

/// Append-only persistence for completed chat exchanges.
///
/// The store assigns ids and timestamps. There are deliberately no update or
/// delete operations: a record stays as it was written.
#[async_trait]
pub trait ChatHistoryRepository: Send + Sync {
    /// Insert one exchange and return the stored record.
    ///
    /// Fails with [`DomainError::InvalidInput`] when `user_message` is empty.
    async fn insert(&self, user_message: &str, llm_reply: &str)
        -> Result<ChatHistoryRecord, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<ChatHistoryRecord>, DomainError>;

    /// Most recent records first.
    async fn list_recent(&self, limit: usize) -> Result<Vec<ChatHistoryRecord>, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}

/// Shared precondition for [`ChatHistoryRepository::insert`] implementations.
pub fn validate_user_message(user_message: &str) -> Result<(), DomainError> {
    if user_message.is_empty() {
        return Err(DomainError::invalid_input("user_message must not be empty"));
    }
    Ok(())
}
