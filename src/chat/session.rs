//! Chat transcript and the send/reply loop.

use std::mem;

use crate::completion::CompletionError;
use crate::models::ChatEntry;

use super::Assistant;

/// Shown in place of a reply when the assistant could not answer.
pub const APOLOGY: &str = "Sorry, I encountered an error. Please try again later.";

/// Opening suggestions offered while the transcript is empty.
pub const SUGGESTIONS: [&str; 3] = [
    "Tell me about Rig Vedha",
    "What are the main themes?",
    "Explain the creation hymn",
];

#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    transcript: Vec<ChatEntry>,
    pending: bool,
    /// The outstanding reply belongs to a cleared conversation.
    stale_reply: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &[ChatEntry] {
        &self.transcript
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Appends the user's entry and marks a request as outstanding.
    ///
    /// Returns the message to forward, or `None` when the input is blank or a
    /// request is already in flight.
    pub fn begin_send(&mut self, text: &str) -> Option<String> {
        if self.pending || text.trim().is_empty() {
            return None;
        }
        self.transcript.push(ChatEntry::user(text));
        self.pending = true;
        Some(text.to_string())
    }

    /// Appends the reply, or the apology when the request failed. A reply to
    /// a message cleared away in the meantime is dropped.
    pub fn finish_send(&mut self, outcome: Result<String, CompletionError>) {
        self.pending = false;
        if mem::take(&mut self.stale_reply) {
            tracing::debug!("Dropping reply to a cleared conversation");
            return;
        }

        let text = match outcome {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(kind = e.kind.as_str(), error = %e.message, "Chat reply failed");
                APOLOGY.to_string()
            }
        };
        self.transcript.push(ChatEntry::assistant(text));
    }

    /// Sends one message and waits for the reply. Blank input is a no-op.
    pub async fn send(&mut self, assistant: &dyn Assistant, text: &str) {
        let Some(message) = self.begin_send(text) else {
            return;
        };
        let outcome = assistant.reply(&message).await;
        self.finish_send(outcome);
    }

    /// Empties the transcript. A request still in flight stays outstanding,
    /// so no second send starts, but its reply is discarded.
    pub fn clear(&mut self) {
        self.transcript.clear();
        if self.pending {
            self.stale_reply = true;
        }
    }
}
