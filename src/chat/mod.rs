//! Chat assistant: transcript state and reply providers.

mod assistant;
mod session;

pub use assistant::{Assistant, CompletionAssistant};
pub use session::{ChatSession, APOLOGY, SUGGESTIONS};
