//! Conversation session management.
//!
//! A `ChatSession` owns the remote conversation handle and the transcript
//! of exchanged messages; both are replaced together on reset.

mod chat;
mod manager;

pub use chat::SendOutcome;
pub use manager::ChatSession;
