mod chat_client;
mod chat_history_repository;

pub use chat_client::*;
pub use chat_history_repository::*;
