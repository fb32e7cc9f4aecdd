//! Quiz session state machine.
//!
//! `Loading -> AwaitingAnswers -> Submitted`, with an explicit restart back to
//! `Loading`. The session never talks to the network itself: callers feed it
//! the fetched batch and the graded result, which keeps every transition
//! synchronous and testable.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::{QuizQuestion, QuizResult, NUM_OPTIONS};
use crate::protocol::validate_name;

use super::scoring::Grader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Loading,
    AwaitingAnswers,
    Submitted,
}

/// Whether a submission must cover every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPolicy {
    /// Submission stays disabled until every question has a selection.
    RequireAll,
    /// Whatever selections exist are forwarded as-is.
    AllowPartial,
}

/// Reasons a session refuses a transition. State is unchanged when returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Quiz is not accepting answers")]
    NotAwaitingAnswers,
    #[error("Quiz is not loading questions")]
    NotLoading,
    #[error("Question {0} does not exist")]
    NoSuchQuestion(usize),
    #[error("Option {0} does not exist")]
    NoSuchOption(usize),
    #[error("{0}")]
    InvalidName(&'static str),
    #[error("{answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },
    #[error("Submission already in progress")]
    AlreadySubmitting,
    #[error("No submission in progress")]
    NotSubmitting,
}

/// Snapshot handed to a [`Grader`] once the session accepts a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub questions: Vec<QuizQuestion>,
    pub selections: BTreeMap<usize, usize>,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    phase: QuizPhase,
    policy: SubmitPolicy,
    questions: Vec<QuizQuestion>,
    name: String,
    selections: BTreeMap<usize, usize>,
    submitting: bool,
    result: Option<QuizResult>,
}

impl QuizSession {
    pub fn new(policy: SubmitPolicy) -> Self {
        Self {
            phase: QuizPhase::Loading,
            policy,
            questions: Vec::new(),
            name: String::new(),
            selections: BTreeMap::new(),
            submitting: false,
            result: None,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn policy(&self) -> SubmitPolicy {
        self.policy
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn selections(&self) -> &BTreeMap<usize, usize> {
        &self.selections
    }

    pub fn selection(&self, question: usize) -> Option<usize> {
        self.selections.get(&question).copied()
    }

    pub fn answered(&self) -> usize {
        self.selections.len()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    /// `Loading -> AwaitingAnswers` once the question source resolves.
    pub fn load(&mut self, questions: Vec<QuizQuestion>) -> Result<(), SessionError> {
        if self.phase != QuizPhase::Loading {
            return Err(SessionError::NotLoading);
        }
        self.questions = questions;
        self.phase = QuizPhase::AwaitingAnswers;
        Ok(())
    }

    /// Records `option` for `question`, replacing any earlier pick.
    pub fn select(&mut self, question: usize, option: usize) -> Result<(), SessionError> {
        self.ensure_editable()?;
        if question >= self.questions.len() {
            return Err(SessionError::NoSuchQuestion(question));
        }
        if option >= NUM_OPTIONS {
            return Err(SessionError::NoSuchOption(option));
        }
        self.selections.insert(question, option);
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_editable()?;
        self.name = name.into();
        Ok(())
    }

    pub fn push_name_char(&mut self, c: char, max_len: usize) -> Result<(), SessionError> {
        self.ensure_editable()?;
        if self.name.chars().count() < max_len {
            self.name.push(c);
        }
        Ok(())
    }

    pub fn pop_name_char(&mut self) -> Result<(), SessionError> {
        self.ensure_editable()?;
        self.name.pop();
        Ok(())
    }

    /// True when the submit control would be enabled.
    pub fn can_submit(&self) -> bool {
        self.check_submission().is_ok()
    }

    /// Validates the session and, on success, snapshots it for grading.
    ///
    /// The session stays in `AwaitingAnswers` (frozen) until
    /// [`complete_submission`](Self::complete_submission) delivers the result.
    pub fn begin_submission(&mut self) -> Result<Submission, SessionError> {
        self.check_submission()?;
        self.submitting = true;

        Ok(Submission {
            name: self.name.trim().to_string(),
            questions: self.questions.clone(),
            selections: self.selections.clone(),
        })
    }

    /// `AwaitingAnswers -> Submitted` with the graded result.
    pub fn complete_submission(&mut self, result: QuizResult) -> Result<&QuizResult, SessionError> {
        if !self.submitting {
            return Err(SessionError::NotSubmitting);
        }
        self.submitting = false;
        self.phase = QuizPhase::Submitted;
        Ok(&*self.result.insert(result))
    }

    /// Validates, grades, and records the result in one step.
    pub async fn submit(&mut self, grader: &dyn Grader) -> Result<&QuizResult, SessionError> {
        let submission = self.begin_submission()?;
        let result = grader
            .grade(&submission.name, &submission.questions, &submission.selections)
            .await;
        self.complete_submission(result)
    }

    /// Back to `Loading` with selections, name, and result cleared.
    pub fn restart(&mut self) {
        self.phase = QuizPhase::Loading;
        self.questions.clear();
        self.name.clear();
        self.selections.clear();
        self.submitting = false;
        self.result = None;
    }

    fn ensure_editable(&self) -> Result<(), SessionError> {
        if self.phase != QuizPhase::AwaitingAnswers {
            return Err(SessionError::NotAwaitingAnswers);
        }
        if self.submitting {
            return Err(SessionError::AlreadySubmitting);
        }
        Ok(())
    }

    fn check_submission(&self) -> Result<(), SessionError> {
        self.ensure_editable()?;
        validate_name(&self.name).map_err(SessionError::InvalidName)?;

        let total = self.questions.len();
        if self.policy == SubmitPolicy::RequireAll && self.selections.len() < total {
            return Err(SessionError::Incomplete {
                answered: self.selections.len(),
                total,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fallback_questions;
    use crate::quiz::LocalGrader;

    fn loaded(policy: SubmitPolicy) -> QuizSession {
        let mut session = QuizSession::new(policy);
        session.load(fallback_questions()).unwrap();
        session
    }

    fn answer_all_correctly(session: &mut QuizSession) {
        for i in 0..session.total_questions() {
            let correct = session.questions()[i].correct_option;
            session.select(i, correct).unwrap();
        }
    }

    #[test]
    fn test_starts_loading() {
        let mut session = QuizSession::new(SubmitPolicy::RequireAll);
        assert_eq!(session.phase(), QuizPhase::Loading);
        assert_eq!(session.select(0, 0), Err(SessionError::NotAwaitingAnswers));
    }

    #[test]
    fn test_load_transitions_once() {
        let mut session = loaded(SubmitPolicy::RequireAll);
        assert_eq!(session.phase(), QuizPhase::AwaitingAnswers);
        assert_eq!(session.total_questions(), 5);
        assert_eq!(session.load(fallback_questions()), Err(SessionError::NotLoading));
    }

    #[test]
    fn test_last_selection_wins() {
        let mut session = loaded(SubmitPolicy::RequireAll);
        session.select(2, 1).unwrap();
        session.select(2, 3).unwrap();

        assert_eq!(session.answered(), 1);
        assert_eq!(session.selection(2), Some(3));
        assert_eq!(session.phase(), QuizPhase::AwaitingAnswers);
    }

    #[test]
    fn test_select_rejects_out_of_range() {
        let mut session = loaded(SubmitPolicy::RequireAll);
        assert_eq!(session.select(5, 0), Err(SessionError::NoSuchQuestion(5)));
        assert_eq!(session.select(0, 4), Err(SessionError::NoSuchOption(4)));
        assert!(session.selections().is_empty());
    }

    #[tokio::test]
    async fn test_empty_name_never_submits() {
        let mut session = loaded(SubmitPolicy::RequireAll);
        answer_all_correctly(&mut session);

        for name in ["", "   "] {
            session.set_name(name).unwrap();
            let err = session.submit(&LocalGrader).await.unwrap_err();
            assert!(matches!(err, SessionError::InvalidName(_)));
            assert_eq!(session.phase(), QuizPhase::AwaitingAnswers);
            assert!(session.result().is_none());
        }
    }

    #[tokio::test]
    async fn test_require_all_blocks_partial() {
        let mut session = loaded(SubmitPolicy::RequireAll);
        session.set_name("Asha").unwrap();
        session.select(0, 0).unwrap();

        assert!(!session.can_submit());
        let err = session.submit(&LocalGrader).await.unwrap_err();
        assert_eq!(err, SessionError::Incomplete { answered: 1, total: 5 });
    }

    #[tokio::test]
    async fn test_allow_partial_forwards_what_exists() {
        let mut session = loaded(SubmitPolicy::AllowPartial);
        session.set_name("Asha").unwrap();
        session.select(0, 0).unwrap();

        let result = session.submit(&LocalGrader).await.unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(result.percentage, 20);
    }

    #[tokio::test]
    async fn test_full_submission() {
        let mut session = loaded(SubmitPolicy::RequireAll);
        answer_all_correctly(&mut session);
        session.set_name("  Asha ").unwrap();
        assert!(session.can_submit());

        let result = session.submit(&LocalGrader).await.unwrap().clone();
        assert_eq!(result.name, "Asha");
        assert_eq!(result.score, 5);
        assert_eq!(result.percentage, 100);
        assert_eq!(session.phase(), QuizPhase::Submitted);

        // Submitted is terminal.
        assert_eq!(session.select(0, 1), Err(SessionError::NotAwaitingAnswers));
        assert_eq!(session.result(), Some(&result));
    }

    #[test]
    fn test_frozen_while_submitting() {
        let mut session = loaded(SubmitPolicy::RequireAll);
        answer_all_correctly(&mut session);
        session.set_name("Asha").unwrap();

        let submission = session.begin_submission().unwrap();
        assert_eq!(submission.selections.len(), 5);
        assert_eq!(session.select(0, 1), Err(SessionError::AlreadySubmitting));
        assert_eq!(session.begin_submission(), Err(SessionError::AlreadySubmitting));
    }

    #[test]
    fn test_complete_requires_submission() {
        let mut session = loaded(SubmitPolicy::RequireAll);
        let result = crate::quiz::score("x", session.questions(), &BTreeMap::new());
        assert_eq!(
            session.complete_submission(result).map(|_| ()),
            Err(SessionError::NotSubmitting)
        );
    }

    #[tokio::test]
    async fn test_restart_clears_everything() {
        let mut session = loaded(SubmitPolicy::RequireAll);
        answer_all_correctly(&mut session);
        session.set_name("Asha").unwrap();
        session.submit(&LocalGrader).await.unwrap();

        session.restart();
        assert_eq!(session.phase(), QuizPhase::Loading);
        assert!(session.questions().is_empty());
        assert!(session.selections().is_empty());
        assert!(session.name().is_empty());
        assert!(session.result().is_none());
    }

    #[test]
    fn test_name_input_is_capped() {
        let mut session = loaded(SubmitPolicy::RequireAll);
        for c in "abcdef".chars() {
            session.push_name_char(c, 4).unwrap();
        }
        assert_eq!(session.name(), "abcd");
        session.pop_name_char().unwrap();
        assert_eq!(session.name(), "abc");
    }
}
