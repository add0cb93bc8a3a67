mod chat_history;
mod relay_chat;

pub use chat_history::*;
pub use relay_chat::*;
