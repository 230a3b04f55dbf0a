//! ChatSession struct and transcript management.

use tracing::debug;

use crate::{ChatMessage, ModelClient};

/// A conversation session: a remote handle plus the transcript exchanged
/// over it. The transcript is append-only except on reset, and the handle
/// and transcript always belong to the same lifecycle epoch.
pub struct ChatSession {
    /// Handle to the remote chat session. Fixed temperature; replaced
    /// wholesale on reset.
    pub(super) handle: Box<dyn ModelClient>,
    /// Ordered transcript of exchanged messages.
    pub(super) transcript: Vec<ChatMessage>,
}

impl ChatSession {
    /// Start a fresh session on the given handle with an empty transcript.
    pub fn new(handle: Box<dyn ModelClient>) -> Self {
        Self {
            handle,
            transcript: Vec::new(),
        }
    }

    /// Discard the current handle and transcript, installing the
    /// replacement handle. Both are swapped in this one call, so the
    /// session never holds a handle from a different epoch than its
    /// transcript. Any exchange in flight on the old handle is abandoned.
    pub fn reset(&mut self, handle: Box<dyn ModelClient>) {
        debug!(
            discarded_messages = self.transcript.len(),
            "Resetting chat session"
        );
        self.handle = handle;
        self.transcript.clear();
    }

    /// The full transcript, in insertion order.
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Number of messages in the transcript.
    pub fn message_count(&self) -> usize {
        self.transcript.len()
    }

    /// The temperature of the current handle.
    pub fn temperature(&self) -> f64 {
        self.handle.temperature()
    }
}
