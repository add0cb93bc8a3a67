use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed exchange between a user and the model.
///
/// Records are created by a [`crate::application::ChatHistoryRepository`]; the
/// id and timestamp are assigned by the store at insert time and a record is
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatHistoryRecord {
    id: i64,
    user_message: String,
    llm_reply: String,
    timestamp: DateTime<Utc>,
}

impl ChatHistoryRecord {
    pub fn new(id: i64, user_message: String, llm_reply: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            user_message,
            llm_reply,
            timestamp,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    pub fn llm_reply(&self) -> &str {
        &self.llm_reply
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn display_line(&self) -> String {
        format!(
            "#{} [{}] {}",
            self.id,
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            preview(&self.user_message, 60)
        )
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    let first_line = text.lines().next().unwrap_or_default();
    if first_line.chars().count() > max_chars {
        let cut: String = first_line.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        first_line.to_string()
    }
}
