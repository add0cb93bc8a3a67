use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::StorageError(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_storage_error(&self) -> bool {
        matches!(self, Self::StorageError(_))
    }

    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError(_))
    }
}

/// Coarse classification of a failed chat-completion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatErrorKind {
    Transport,
    Timeout,
    Authentication,
    Status,
    MalformedResponse,
}

impl ChatErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatErrorKind::Transport => "transport",
            ChatErrorKind::Timeout => "timeout",
            ChatErrorKind::Authentication => "authentication",
            ChatErrorKind::Status => "status",
            ChatErrorKind::MalformedResponse => "malformed_response",
        }
    }
}

/// A chat-completion call that did not produce a reply.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("endpoint rejected credentials ({status}): {body}")]
    Authentication { status: u16, body: String },

    #[error("endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ChatError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Classify an HTTP error status. 401 and 403 count as authentication failures.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            401 | 403 => Self::Authentication { status, body },
            _ => Self::Status { status, body },
        }
    }

    pub fn kind(&self) -> ChatErrorKind {
        match self {
            Self::Transport(_) => ChatErrorKind::Transport,
            Self::Timeout(_) => ChatErrorKind::Timeout,
            Self::Authentication { .. } => ChatErrorKind::Authentication,
            Self::Status { .. } => ChatErrorKind::Status,
            Self::MalformedResponse(_) => ChatErrorKind::MalformedResponse,
        }
    }

    /// The text shown to a user in place of a model reply.
    pub fn to_reply_text(&self) -> String {
        format!("An error occurred: {}", self)
    }
}
