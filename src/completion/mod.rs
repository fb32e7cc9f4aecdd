//! Text-completion service abstraction
//!
//! The completion service is an opaque prompt-in, text-out API. Quiz
//! generation and the chat assistant both sit on top of [`CompletionClient`].

mod error;
mod gemini;
pub(crate) mod http;

pub use error::{CompletionError, CompletionErrorKind};
pub use gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiClient};

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;

/// Common interface for completion services
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a free-text prompt and return the first text the service produced.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;

    /// Model identifier, for logs.
    fn model_id(&self) -> &str;
}

/// Logging wrapper for completion clients
pub struct LoggingClient {
    inner: Arc<dyn CompletionClient>,
    model_id: String,
}

impl LoggingClient {
    pub fn new(inner: Arc<dyn CompletionClient>) -> Self {
        let model_id = inner.model_id().to_string();
        Self { inner, model_id }
    }
}

#[async_trait]
impl CompletionClient for LoggingClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let start = Instant::now();
        let result = self.inner.complete(prompt).await;
        let duration = start.elapsed();

        match &result {
            Ok(text) => {
                tracing::info!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    prompt_chars = prompt.len(),
                    reply_chars = text.len(),
                    "Completion request finished"
                );
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    kind = e.kind.as_str(),
                    error = %e.message,
                    "Completion request failed"
                );
            }
        }

        result
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
