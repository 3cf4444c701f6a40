//! Conversation core for Palaver.
//!
//! Provides:
//! - `Session`, the bounded transcript of turns sent with every request
//! - `OpenAiClient`, a chat-completions client that folds every failure
//!   into a small `ErrorKind` taxonomy
//! - `Conversation`, the submit/reply cycle driving a `Presenter`

pub mod conversation;
pub mod openai;
pub mod outcome;
pub mod session;

use async_trait::async_trait;

pub use conversation::{Conversation, Phase, Presenter, Submission};
pub use openai::{CompletionConfig, OpenAiClient};
pub use outcome::{ErrorKind, RequestOutcome};
pub use session::{Session, DEFAULT_MAX_TURNS};

/// A completion service that turns a transcript into one reply.
///
/// Implementations issue exactly one request per call and never retry.
/// All transport and decoding failures are classified into the returned
/// outcome; nothing escapes as an error or a panic.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, turns: &[Turn]) -> RequestOutcome;
}

/// One message in the conversation. Serializes as the wire message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Rate limited")]
    RateLimited,
    #[error("Quota exceeded: HTTP {status}: {message}")]
    QuotaExceeded { status: u16, message: String },
    #[error("API error: HTTP {status}: {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout")]
    Timeout,
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Empty reply")]
    EmptyReply,
    #[error("Session is busy with another request")]
    Busy,
    #[error("Empty input")]
    EmptyInput,
    #[error("Client configuration error: {0}")]
    Config(String),
}

impl AiError {
    /// Map onto the user-facing taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AiError::Unauthorized => ErrorKind::Unauthorized,
            AiError::RateLimited => ErrorKind::RateLimited,
            AiError::QuotaExceeded { .. } => ErrorKind::QuotaExceeded,
            _ => ErrorKind::Generic,
        }
    }
}
