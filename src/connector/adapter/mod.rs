mod duckdb_chat_history_repository;
mod echo_chat_client;
mod in_memory_chat_history_repository;
mod openai_chat_client;

pub use duckdb_chat_history_repository::*;
pub use echo_chat_client::*;
pub use in_memory_chat_history_repository::*;
pub use openai_chat_client::*;
