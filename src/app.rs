//! Portal state: the main menu and the one feature window open on top of it.
//!
//! Each window owns an independent session and a fresh id. Network work runs
//! on spawned tasks that report back through [`AppEvent`]s tagged with that
//! id; anything addressed to a window that has since closed is dropped.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

use crate::chat::{ChatSession, SUGGESTIONS};
use crate::completion::CompletionError;
use crate::models::{QuizQuestion, QuizResult, NUM_OPTIONS};
use crate::pdf::PdfViewport;
use crate::protocol::NAME_MAX_LENGTH;
use crate::quiz::{QuizPhase, QuizSession, SessionError};
use crate::services::Services;

const CHAT_INPUT_MAX_LENGTH: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Pdf,
    Quiz,
    Chat,
}

impl Feature {
    pub const ALL: [Feature; 3] = [Feature::Pdf, Feature::Quiz, Feature::Chat];

    pub fn title(self) -> &'static str {
        match self {
            Feature::Pdf => "Read Rig Vedha",
            Feature::Quiz => "Rig Vedha Quiz",
            Feature::Chat => "Rig Vedha Chatbot",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Feature::Pdf => "Read the complete Rig Vedha text",
            Feature::Quiz => "Test your knowledge with an AI-generated quiz",
            Feature::Chat => "Ask questions and learn with AI assistance",
        }
    }
}

/// Result of background work, addressed to the window that asked for it.
#[derive(Debug)]
pub struct AppEvent {
    pub window: Uuid,
    pub update: WindowUpdate,
}

#[derive(Debug)]
pub enum WindowUpdate {
    QuestionsLoaded(Vec<QuizQuestion>),
    Graded(QuizResult),
    ChatReplied(Result<String, CompletionError>),
}

/// Where the quiz window's focus is while answers are being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCursor {
    Question(usize),
    Submit,
}

pub struct PdfWindow {
    pub id: Uuid,
    pub viewport: PdfViewport,
    pub status: Option<String>,
}

pub struct QuizWindow {
    pub id: Uuid,
    pub session: QuizSession,
    pub cursor: QuizCursor,
    pub highlighted: usize,
    pub notice: Option<String>,
    pub result_scroll: usize,
}

impl QuizWindow {
    fn new(id: Uuid, session: QuizSession) -> Self {
        Self {
            id,
            session,
            cursor: QuizCursor::Question(0),
            highlighted: 0,
            notice: None,
            result_scroll: 0,
        }
    }

    fn focus(&mut self, cursor: QuizCursor) {
        self.cursor = cursor;
        if let QuizCursor::Question(index) = cursor {
            self.highlighted = self.session.selection(index).unwrap_or(0);
        }
    }

    fn reset_view(&mut self) {
        self.cursor = QuizCursor::Question(0);
        self.highlighted = 0;
        self.notice = None;
        self.result_scroll = 0;
    }
}

pub struct ChatWindow {
    pub id: Uuid,
    pub session: ChatSession,
    pub input: String,
    suggestion: usize,
}

pub enum Window {
    Pdf(PdfWindow),
    Quiz(QuizWindow),
    Chat(ChatWindow),
}

impl Window {
    pub fn id(&self) -> Uuid {
        match self {
            Window::Pdf(w) => w.id,
            Window::Quiz(w) => w.id,
            Window::Chat(w) => w.id,
        }
    }

    pub fn feature(&self) -> Feature {
        match self {
            Window::Pdf(_) => Feature::Pdf,
            Window::Quiz(_) => Feature::Quiz,
            Window::Chat(_) => Feature::Chat,
        }
    }
}

pub struct App {
    pub should_quit: bool,
    menu_selected: usize,
    window: Option<Window>,
    services: Services,
    events: UnboundedSender<AppEvent>,
}

impl App {
    pub fn new(services: Services, events: UnboundedSender<AppEvent>) -> Self {
        Self {
            should_quit: false,
            menu_selected: 0,
            window: None,
            services,
            events,
        }
    }

    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    pub fn menu_selected(&self) -> usize {
        self.menu_selected
    }

    pub fn select_next_feature(&mut self) {
        self.menu_selected = (self.menu_selected + 1) % Feature::ALL.len();
    }

    pub fn select_previous_feature(&mut self) {
        self.menu_selected = (self.menu_selected + Feature::ALL.len() - 1) % Feature::ALL.len();
    }

    pub fn open_selected(&mut self) {
        self.open(Feature::ALL[self.menu_selected]);
    }

    /// Opens `feature` in a fresh window, replacing any open one.
    pub fn open(&mut self, feature: Feature) {
        self.close_window();

        let id = Uuid::new_v4();
        tracing::info!(window = %id, feature = feature.title(), "Window opened");

        self.window = Some(match feature {
            Feature::Pdf => Window::Pdf(PdfWindow {
                id,
                viewport: self.services.pdf.clone(),
                status: None,
            }),
            Feature::Quiz => {
                spawn_fetch(&self.services, &self.events, id);
                Window::Quiz(QuizWindow::new(id, QuizSession::new(self.services.submit_policy)))
            }
            Feature::Chat => Window::Chat(ChatWindow {
                id,
                session: ChatSession::new(),
                input: String::new(),
                suggestion: 0,
            }),
        });
    }

    /// Discards the open window and its session. Late results for it are
    /// ignored when they arrive.
    pub fn close_window(&mut self) {
        if let Some(window) = self.window.take() {
            tracing::info!(window = %window.id(), feature = window.feature().title(), "Window closed");
        }
    }

    pub fn apply(&mut self, event: AppEvent) {
        let Some(window) = self.window.as_mut().filter(|w| w.id() == event.window) else {
            tracing::debug!(window = %event.window, "Dropping result for closed window");
            return;
        };

        match (window, event.update) {
            (Window::Quiz(quiz), WindowUpdate::QuestionsLoaded(questions)) => {
                tracing::info!(window = %quiz.id, count = questions.len(), "Quiz questions loaded");
                if let Err(e) = quiz.session.load(questions) {
                    tracing::warn!(window = %quiz.id, error = %e, "Ignoring question batch");
                }
                quiz.reset_view();
            }
            (Window::Quiz(quiz), WindowUpdate::Graded(result)) => {
                tracing::info!(
                    window = %quiz.id,
                    score = result.score,
                    total = result.total,
                    "Quiz graded"
                );
                if let Err(e) = quiz.session.complete_submission(result) {
                    tracing::warn!(window = %quiz.id, error = %e, "Ignoring graded result");
                }
                quiz.result_scroll = 0;
            }
            (Window::Chat(chat), WindowUpdate::ChatReplied(outcome)) => {
                chat.session.finish_send(outcome);
            }
            (window, update) => {
                tracing::warn!(window = %window.id(), ?update, "Update does not match window");
            }
        }
    }

    // PDF window

    pub fn open_pdf(&mut self) {
        let Some(Window::Pdf(pdf)) = &mut self.window else {
            return;
        };
        pdf.status = Some(match pdf.viewport.open() {
            Ok(()) => format!("Opened {}", pdf.viewport.url()),
            Err(e) => {
                tracing::warn!(url = %pdf.viewport.url(), error = %e, "Failed to launch document viewer");
                format!("Could not open a viewer: {}", e)
            }
        });
    }

    // Quiz window

    pub fn quiz(&self) -> Option<&QuizWindow> {
        match &self.window {
            Some(Window::Quiz(quiz)) => Some(quiz),
            _ => None,
        }
    }

    fn quiz_mut(&mut self) -> Option<&mut QuizWindow> {
        match &mut self.window {
            Some(Window::Quiz(quiz)) => Some(quiz),
            _ => None,
        }
    }

    pub fn highlight_next_option(&mut self) {
        if let Some(quiz) = self.quiz_mut() {
            quiz.highlighted = (quiz.highlighted + 1) % NUM_OPTIONS;
        }
    }

    pub fn highlight_previous_option(&mut self) {
        if let Some(quiz) = self.quiz_mut() {
            quiz.highlighted = (quiz.highlighted + NUM_OPTIONS - 1) % NUM_OPTIONS;
        }
    }

    /// Records the highlighted option for the focused question and moves on.
    pub fn choose_highlighted(&mut self) {
        let Some(quiz) = self.quiz_mut() else {
            return;
        };
        let QuizCursor::Question(index) = quiz.cursor else {
            return;
        };

        match quiz.session.select(index, quiz.highlighted) {
            Ok(()) => {
                quiz.notice = None;
                let next = if index + 1 < quiz.session.total_questions() {
                    QuizCursor::Question(index + 1)
                } else {
                    QuizCursor::Submit
                };
                quiz.focus(next);
            }
            Err(e) => quiz.notice = Some(e.to_string()),
        }
    }

    pub fn next_question(&mut self) {
        let Some(quiz) = self.quiz_mut() else {
            return;
        };
        if let QuizCursor::Question(index) = quiz.cursor {
            let next = if index + 1 < quiz.session.total_questions() {
                QuizCursor::Question(index + 1)
            } else {
                QuizCursor::Submit
            };
            quiz.focus(next);
        }
    }

    pub fn previous_question(&mut self) {
        let Some(quiz) = self.quiz_mut() else {
            return;
        };
        let previous = match quiz.cursor {
            QuizCursor::Question(index) => QuizCursor::Question(index.saturating_sub(1)),
            QuizCursor::Submit => {
                QuizCursor::Question(quiz.session.total_questions().saturating_sub(1))
            }
        };
        quiz.focus(previous);
    }

    pub fn quiz_name_push(&mut self, c: char) {
        if let Some(quiz) = self.quiz_mut() {
            if quiz.session.push_name_char(c, NAME_MAX_LENGTH).is_ok() {
                quiz.notice = None;
            }
        }
    }

    pub fn quiz_name_pop(&mut self) {
        if let Some(quiz) = self.quiz_mut() {
            if quiz.session.pop_name_char().is_ok() {
                quiz.notice = None;
            }
        }
    }

    /// Validates and hands the answers to the grader. Rejections leave the
    /// quiz where it was, with the reason shown.
    pub fn submit_quiz(&mut self) {
        let Some(Window::Quiz(quiz)) = &mut self.window else {
            return;
        };

        match quiz.session.begin_submission() {
            Ok(submission) => {
                quiz.notice = None;
                let grader = Arc::clone(&self.services.grader);
                let events = self.events.clone();
                let window = quiz.id;
                tokio::spawn(async move {
                    let result = grader
                        .grade(&submission.name, &submission.questions, &submission.selections)
                        .await;
                    let _ = events.send(AppEvent {
                        window,
                        update: WindowUpdate::Graded(result),
                    });
                });
            }
            Err(e) => {
                tracing::debug!(window = %quiz.id, error = %e, "Submission rejected");
                quiz.notice = Some(submit_notice(&e));
            }
        }
    }

    /// Starts over with a freshly fetched batch. Only offered once a result
    /// is showing, so no fetch or grade is outstanding.
    pub fn restart_quiz(&mut self) {
        let Some(Window::Quiz(quiz)) = &mut self.window else {
            return;
        };
        if quiz.session.phase() != QuizPhase::Submitted {
            return;
        }

        quiz.session.restart();
        quiz.reset_view();
        spawn_fetch(&self.services, &self.events, quiz.id);
    }

    pub fn scroll_results_down(&mut self) {
        if let Some(quiz) = self.quiz_mut() {
            let max_scroll = quiz
                .session
                .result()
                .map(|r| r.detailed_results.len().saturating_sub(1))
                .unwrap_or(0);
            quiz.result_scroll = (quiz.result_scroll + 1).min(max_scroll);
        }
    }

    pub fn scroll_results_up(&mut self) {
        if let Some(quiz) = self.quiz_mut() {
            quiz.result_scroll = quiz.result_scroll.saturating_sub(1);
        }
    }

    // Chat window

    pub fn chat(&self) -> Option<&ChatWindow> {
        match &self.window {
            Some(Window::Chat(chat)) => Some(chat),
            _ => None,
        }
    }

    fn chat_mut(&mut self) -> Option<&mut ChatWindow> {
        match &mut self.window {
            Some(Window::Chat(chat)) => Some(chat),
            _ => None,
        }
    }

    pub fn chat_input_push(&mut self, c: char) {
        if let Some(chat) = self.chat_mut() {
            if chat.input.chars().count() < CHAT_INPUT_MAX_LENGTH {
                chat.input.push(c);
            }
        }
    }

    pub fn chat_input_pop(&mut self) {
        if let Some(chat) = self.chat_mut() {
            chat.input.pop();
        }
    }

    /// Fills the input with the next opening suggestion.
    pub fn chat_suggest(&mut self) {
        if let Some(chat) = self.chat_mut() {
            chat.input = SUGGESTIONS[chat.suggestion % SUGGESTIONS.len()].to_string();
            chat.suggestion += 1;
        }
    }

    pub fn send_chat(&mut self) {
        let Some(Window::Chat(chat)) = &mut self.window else {
            return;
        };
        let Some(message) = chat.session.begin_send(&chat.input) else {
            return;
        };
        chat.input.clear();

        let assistant = Arc::clone(&self.services.assistant);
        let events = self.events.clone();
        let window = chat.id;
        tokio::spawn(async move {
            let outcome = assistant.reply(&message).await;
            let _ = events.send(AppEvent {
                window,
                update: WindowUpdate::ChatReplied(outcome),
            });
        });
    }

    pub fn clear_chat(&mut self) {
        if let Some(chat) = self.chat_mut() {
            chat.session.clear();
        }
    }
}

fn spawn_fetch(services: &Services, events: &UnboundedSender<AppEvent>, window: Uuid) {
    let source = Arc::clone(&services.questions);
    let count = services.question_count;
    let events = events.clone();
    tokio::spawn(async move {
        let questions = source.fetch(count).await;
        let _ = events.send(AppEvent {
            window,
            update: WindowUpdate::QuestionsLoaded(questions),
        });
    });
}

fn submit_notice(error: &SessionError) -> String {
    match error {
        SessionError::Incomplete { answered, total } => {
            format!("Answer every question first ({} of {} answered)", answered, total)
        }
        other => other.to_string(),
    }
}
