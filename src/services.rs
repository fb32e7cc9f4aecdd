//! Wires the configured variant into the capability traits the windows use.

use std::sync::Arc;

use crate::backend::BackendClient;
use crate::chat::{Assistant, CompletionAssistant};
use crate::completion::{CompletionClient, GeminiClient, LoggingClient};
use crate::config::{Mode, PortalConfig};
use crate::pdf::PdfViewport;
use crate::quiz::{CompletionQuestionSource, Grader, LocalGrader, QuestionSource, SubmitPolicy};

/// Everything a feature window needs, shared across windows.
#[derive(Clone)]
pub struct Services {
    pub questions: Arc<dyn QuestionSource>,
    pub assistant: Arc<dyn Assistant>,
    pub grader: Arc<dyn Grader>,
    pub submit_policy: SubmitPolicy,
    pub question_count: usize,
    pub pdf: PdfViewport,
}

impl Services {
    pub fn from_config(config: &PortalConfig) -> Self {
        let pdf = PdfViewport::new(config.resolved_pdf_url());

        match config.mode {
            Mode::Direct => {
                if config.api_key.is_none() {
                    tracing::warn!("No GEMINI_API_KEY configured; quiz and chat will use fallbacks");
                }
                let gemini: Arc<dyn CompletionClient> = Arc::new(GeminiClient::new(
                    config.api_key.clone(),
                    config.model.clone(),
                    &config.completion_base_url,
                ));
                let client: Arc<dyn CompletionClient> = Arc::new(LoggingClient::new(gemini));

                Self {
                    questions: Arc::new(CompletionQuestionSource::new(client.clone())),
                    assistant: Arc::new(CompletionAssistant::new(client)),
                    grader: Arc::new(LocalGrader),
                    submit_policy: SubmitPolicy::RequireAll,
                    question_count: config.question_count,
                    pdf,
                }
            }
            Mode::Backend => {
                let backend = Arc::new(BackendClient::new(&config.backend_url));
                tracing::info!(backend = %backend.base_url(), "Using backend-delegated services");

                Self {
                    questions: backend.clone(),
                    assistant: backend.clone(),
                    grader: backend,
                    submit_policy: SubmitPolicy::AllowPartial,
                    question_count: config.question_count,
                    pdf,
                }
            }
        }
    }
}
