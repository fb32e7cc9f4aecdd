//! Quiz lifecycle: question sourcing, session state, scoring.

mod scoring;
mod session;
mod source;

pub use scoring::{percentage, score, Grader, LocalGrader};
pub use session::{QuizPhase, QuizSession, SessionError, Submission, SubmitPolicy};
pub use source::{fallback_batch, settle_batch, CompletionQuestionSource, QuestionSource, QUIZ_LENGTH};
