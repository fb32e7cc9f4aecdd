//! Local scoring engine and the grading seam.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::models::{QuestionOutcome, QuizQuestion, QuizResult, NOT_ANSWERED};

/// Turns a set of selections into a result.
#[async_trait]
pub trait Grader: Send + Sync {
    async fn grade(
        &self,
        name: &str,
        questions: &[QuizQuestion],
        selections: &BTreeMap<usize, usize>,
    ) -> QuizResult;
}

/// Grades against the answer keys held in the questions themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalGrader;

#[async_trait]
impl Grader for LocalGrader {
    async fn grade(
        &self,
        name: &str,
        questions: &[QuizQuestion],
        selections: &BTreeMap<usize, usize>,
    ) -> QuizResult {
        score(name, questions, selections)
    }
}

/// Scores selections against answer keys. Unanswered questions count as wrong.
pub fn score(name: &str, questions: &[QuizQuestion], selections: &BTreeMap<usize, usize>) -> QuizResult {
    let detailed_results: Vec<QuestionOutcome> = questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let chosen = selections.get(&index).copied();
            let user_answer = chosen
                .and_then(|option| question.option_text(option))
                .unwrap_or(NOT_ANSWERED);

            QuestionOutcome {
                question: question.prompt.clone(),
                user_answer: user_answer.to_string(),
                correct_answer: question.correct_text().to_string(),
                is_correct: chosen == Some(question.correct_option),
                explanation: question.explanation.clone(),
            }
        })
        .collect();

    let score = detailed_results.iter().filter(|outcome| outcome.is_correct).count();
    let total = questions.len();

    QuizResult {
        name: name.to_string(),
        score,
        total,
        percentage: percentage(score, total),
        detailed_results,
    }
}

/// `round(100 * score / total)` with halves rounded up, 0 for an empty quiz.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * score + total) / (2 * total)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fallback_questions;
    use proptest::prelude::*;

    #[test]
    fn test_all_correct_on_fallback_bank() {
        let questions = fallback_questions();
        let selections: BTreeMap<usize, usize> = questions
            .iter()
            .enumerate()
            .map(|(i, q)| (i, q.correct_option))
            .collect();

        let result = score("Asha", &questions, &selections);
        assert_eq!(result.score, 5);
        assert_eq!(result.total, 5);
        assert_eq!(result.percentage, 100);
        assert!(result.detailed_results.iter().all(|d| d.is_correct));
    }

    #[test]
    fn test_unanswered_counts_as_wrong() {
        let questions = fallback_questions();
        let selections = BTreeMap::from([(0, 0), (1, 2)]);

        let result = score("Asha", &questions, &selections);
        assert_eq!(result.score, 1);
        assert_eq!(result.percentage, 20);
        assert_eq!(result.detailed_results[1].user_answer, "5");
        assert_eq!(result.detailed_results[1].correct_answer, "10");
        assert_eq!(result.detailed_results[4].user_answer, NOT_ANSWERED);
        assert!(!result.detailed_results[4].is_correct);
    }

    #[test]
    fn test_empty_quiz() {
        let result = score("Asha", &[], &BTreeMap::new());
        assert_eq!(result.score, 0);
        assert_eq!(result.total, 0);
        assert_eq!(result.percentage, 0);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(0, 5), 0);
    }

    #[tokio::test]
    async fn test_local_grader_matches_score() {
        let questions = fallback_questions();
        let selections = BTreeMap::from([(2, 0)]);
        let graded = LocalGrader.grade("Ravi", &questions, &selections).await;
        assert_eq!(graded, score("Ravi", &questions, &selections));
    }

    proptest! {
        #[test]
        fn prop_score_bounded_and_percentage_consistent(
            picks in proptest::collection::vec(proptest::option::of(0usize..4), 0..12)
        ) {
            let questions: Vec<QuizQuestion> = (0..picks.len())
                .map(|i| QuizQuestion::new(format!("Q{i}"), ["a", "b", "c", "d"], i % 4, ""))
                .collect();
            let selections: BTreeMap<usize, usize> = picks
                .iter()
                .enumerate()
                .filter_map(|(i, pick)| pick.map(|option| (i, option)))
                .collect();

            let result = score("p", &questions, &selections);
            prop_assert!(result.score <= result.total);
            prop_assert_eq!(result.total, questions.len());
            if result.total > 0 {
                let expected = (100.0 * result.score as f64 / result.total as f64).round() as u32;
                prop_assert_eq!(result.percentage, expected);
            }
        }
    }
}
