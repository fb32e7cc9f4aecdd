use serde::{Deserialize, Serialize};

/// Option text recorded for a question the respondent skipped.
pub const NOT_ANSWERED: &str = "Not answered";

/// Scored outcome of a submitted quiz. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub name: String,
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub detailed_results: Vec<QuestionOutcome>,
}

/// Per-question breakdown shown under the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOutcome {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    #[serde(default)]
    pub explanation: String,
}
