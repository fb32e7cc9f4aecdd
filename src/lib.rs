//! # rig-vedha-portal
//!
//! A terminal knowledge portal for Rig Vedha: a PDF viewer, an AI-generated
//! quiz, and an AI chat assistant, each opened in its own window.
//!
//! The quiz and chat run either directly against the Gemini API or through a
//! backend service; both variants implement the same capability traits
//! ([`QuestionSource`], [`Assistant`], [`Grader`]), so sessions are built the
//! same way on either.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rig_vedha_portal::{Portal, PortalConfig, PortalError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), PortalError> {
//!     let config = PortalConfig {
//!         api_key: std::env::var("GEMINI_API_KEY").ok(),
//!         ..PortalConfig::default()
//!     };
//!
//!     Portal::new(&config).run(None).await
//! }
//! ```

mod app;
pub mod backend;
pub mod chat;
mod config;
pub mod completion;
mod data;
mod input;
mod models;
mod pdf;
pub mod protocol;
pub mod quiz;
mod services;
pub mod terminal;
#[cfg(test)]
mod test_support;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver};

pub use app::{App, AppEvent, Feature, Window, WindowUpdate};
pub use backend::BackendClient;
pub use chat::{Assistant, ChatSession, CompletionAssistant};
pub use completion::{CompletionClient, CompletionError, CompletionErrorKind, GeminiClient};
pub use config::{Mode, PortalConfig, DEFAULT_BACKEND_URL};
pub use data::{fallback_questions, parse_question_batch, strip_code_fences};
pub use models::{ChatEntry, QuestionOutcome, QuizQuestion, QuizResult, Speaker};
pub use pdf::PdfViewport;
pub use quiz::{Grader, LocalGrader, QuestionSource, QuizPhase, QuizSession, SubmitPolicy};
pub use services::Services;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for running the portal.
#[derive(Debug, Error)]
pub enum PortalError {
    /// Terminal setup, drawing, or input failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// The portal: a menu plus one feature window at a time.
pub struct Portal {
    app: App,
    events: UnboundedReceiver<AppEvent>,
}

impl Portal {
    /// Builds the portal's services from `config`. Nothing touches the
    /// network until a window asks for it.
    pub fn new(config: &PortalConfig) -> Self {
        Self::with_services(Services::from_config(config))
    }

    pub fn with_services(services: Services) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        Self {
            app: App::new(services, tx),
            events,
        }
    }

    /// Run the portal in the terminal, optionally with a window already open.
    ///
    /// Takes over the terminal and returns when the user quits. Must be
    /// called inside a multi-threaded tokio runtime.
    pub async fn run(mut self, start: Option<Feature>) -> Result<(), PortalError> {
        if let Some(feature) = start {
            self.app.open(feature);
        }

        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app, &mut self.events);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
    events: &mut UnboundedReceiver<AppEvent>,
) -> Result<(), PortalError> {
    loop {
        while let Ok(event) = events.try_recv() {
            app.apply(event);
        }

        if app.should_quit {
            break;
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    input::handle_key(app, key);
                }
            }
        }
    }

    Ok(())
}
