//! Chat engine for GemChat.
//!
//! Provides a Gemini API client and conversation session management:
//! - Timestamped transcript of exchanged messages
//! - Atomic session reset (fresh remote handle + empty transcript)
//! - Exit-sentinel handling ("exit" ends the session without a remote call)

pub mod gemini;
pub mod session;

use async_trait::async_trait;
use chrono::{DateTime, Local};

pub use gemini::{GeminiClient, GeminiConfig};
pub use session::{ChatSession, SendOutcome};

/// Handle to a remote stateful chat session. The temperature is fixed at
/// handle creation and lives for the handle's lifetime; replacing the
/// handle is the only way to change it.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Request a reply to the conversation so far. The full transcript is
    /// sent on every call; the remote service holds no state between calls.
    async fn send_message(&self, transcript: &[ChatMessage]) -> Result<String, AiError>;

    /// The sampling temperature this handle was created with.
    fn temperature(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One entry in a conversation transcript. Immutable once created;
/// transcript order is insertion order.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    /// Create a message stamped with the current local time.
    pub fn now(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Local::now(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_now_stamps_current_time() {
        let before = Local::now();
        let msg = ChatMessage::now(Role::User, "hello");
        let after = Local::now();

        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.text, "hello");
        assert!(msg.timestamp >= before && msg.timestamp <= after);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Model).unwrap(), "\"model\"");
    }

    #[test]
    fn error_display() {
        let err = AiError::ApiError("HTTP 500: boom".into());
        assert_eq!(err.to_string(), "API error: HTTP 500: boom");

        let err = AiError::NetworkError("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");

        let err = AiError::ParseError("no candidates".into());
        assert_eq!(err.to_string(), "Parse error: no candidates");

        assert_eq!(AiError::RateLimited.to_string(), "Rate limited");
        assert_eq!(AiError::Timeout.to_string(), "Timeout");
    }
}
