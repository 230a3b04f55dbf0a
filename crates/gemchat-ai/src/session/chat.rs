//! Async send path for ChatSession.

use crate::{AiError, ChatMessage, Role};

use super::manager::ChatSession;

/// The message a user typed is matched against this sentinel (trimmed,
/// case-insensitive) before anything touches the transcript.
const EXIT_SENTINEL: &str = "exit";

/// Result of a successful `send`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The remote model replied with this text; the transcript now holds
    /// both the user message and the reply.
    Reply(String),
    /// The user typed the exit sentinel. Nothing was appended and no
    /// remote call was made.
    SessionEnded,
}

impl ChatSession {
    /// Append a user message and request the model's reply.
    ///
    /// On success the transcript grows by two messages (user, then model).
    /// If the remote call fails, the user message stays in the transcript
    /// and the error is returned for the caller to display; there is no
    /// retry and no rollback.
    pub async fn send(&mut self, text: impl Into<String>) -> Result<SendOutcome, AiError> {
        let text = text.into();

        if text.trim().eq_ignore_ascii_case(EXIT_SENTINEL) {
            return Ok(SendOutcome::SessionEnded);
        }

        self.transcript.push(ChatMessage::now(Role::User, text));

        let reply = self.handle.send_message(&self.transcript).await?;

        self.transcript
            .push(ChatMessage::now(Role::Model, reply.clone()));

        Ok(SendOutcome::Reply(reply))
    }
}
