mod chat_history;
mod chat_message;
mod llm_config;

pub use chat_history::*;
pub use chat_message::*;
pub use llm_config::*;
