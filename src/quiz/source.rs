//! Where quiz batches come from.

use std::sync::Arc;

use async_trait::async_trait;

use crate::completion::{CompletionClient, CompletionError};
use crate::data::{fallback_questions, parse_question_batch};
use crate::models::QuizQuestion;

/// Questions per quiz.
pub const QUIZ_LENGTH: usize = 5;

/// Supplies a batch of quiz items.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Always yields exactly `count` well-formed items. Failures are absorbed
    /// by substituting the fallback bank, never surfaced.
    async fn fetch(&self, count: usize) -> Vec<QuizQuestion>;
}

/// Asks a completion service to write the quiz.
pub struct CompletionQuestionSource {
    client: Arc<dyn CompletionClient>,
}

impl CompletionQuestionSource {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QuestionSource for CompletionQuestionSource {
    async fn fetch(&self, count: usize) -> Vec<QuizQuestion> {
        let outcome = match self.client.complete(&quiz_prompt(count)).await {
            Ok(text) => parse_question_batch(&text),
            Err(e) => Err(e),
        };
        settle_batch(outcome, count)
    }
}

/// Turns a fetch outcome into exactly `count` items: truncate a long batch,
/// replace a short or failed one with the fallback bank.
pub fn settle_batch(outcome: Result<Vec<QuizQuestion>, CompletionError>, count: usize) -> Vec<QuizQuestion> {
    match outcome {
        Ok(mut questions) if questions.len() >= count => {
            questions.truncate(count);
            questions
        }
        Ok(questions) => {
            tracing::warn!(
                received = questions.len(),
                expected = count,
                "Too few usable questions; using fallback set"
            );
            fallback_batch(count)
        }
        Err(e) => {
            tracing::warn!(
                kind = e.kind.as_str(),
                error = %e.message,
                "Question generation failed; using fallback set"
            );
            fallback_batch(count)
        }
    }
}

/// The fallback bank, repeated if a caller ever asks for more than it holds.
pub fn fallback_batch(count: usize) -> Vec<QuizQuestion> {
    fallback_questions().into_iter().cycle().take(count).collect()
}

fn quiz_prompt(count: usize) -> String {
    format!(
        r#"Generate exactly {count} multiple choice questions about Rig Vedha.
Return ONLY valid JSON array format without any other text.
Example format:
[
  {{
    "q": "What is Rig Vedha?",
    "options": ["Ancient Hindu scripture", "Modern book", "Movie", "Song"],
    "answer_index": 0,
    "explanation": "Rig Vedha is the oldest of the four Vedas"
  }}
]
Requirements:
- Each question must have: q, options (array of 4 strings), answer_index (0-3), and explanation
- Make questions about Rig Vedha content, structure, and significance
- Ensure answer_index is correct for each question
- Return exactly {count} questions"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeCompletion;

    fn generated(n: usize) -> String {
        let items: Vec<String> = (0..n)
            .map(|i| {
                format!(
                    r#"{{"q": "Generated {i}", "options": ["a", "b", "c", "d"], "answer_index": {}, "explanation": "e"}}"#,
                    i % 4
                )
            })
            .collect();
        format!("```json\n[{}]\n```", items.join(","))
    }

    async fn fetch_with(client: FakeCompletion) -> Vec<QuizQuestion> {
        CompletionQuestionSource::new(Arc::new(client))
            .fetch(QUIZ_LENGTH)
            .await
    }

    #[tokio::test]
    async fn test_uses_generated_batch() {
        let questions = fetch_with(FakeCompletion::replying(&generated(5))).await;
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[3].prompt, "Generated 3");
    }

    #[tokio::test]
    async fn test_truncates_long_batch() {
        let questions = fetch_with(FakeCompletion::replying(&generated(8))).await;
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[4].prompt, "Generated 4");
    }

    #[tokio::test]
    async fn test_short_batch_falls_back() {
        let questions = fetch_with(FakeCompletion::replying(&generated(3))).await;
        assert_eq!(questions, fallback_questions());
    }

    #[tokio::test]
    async fn test_malformed_json_falls_back() {
        let questions = fetch_with(FakeCompletion::replying("[{\"q\": \"cut off")).await;
        assert_eq!(questions, fallback_questions());
    }

    #[tokio::test]
    async fn test_service_error_falls_back() {
        for err in [
            CompletionError::network("down"),
            CompletionError::bad_status(500, "boom"),
            CompletionError::missing_credential("no key"),
        ] {
            let questions = fetch_with(FakeCompletion::failing(err)).await;
            assert_eq!(questions, fallback_questions());
        }
    }

    #[tokio::test]
    async fn test_prompt_asks_for_count() {
        let client = Arc::new(FakeCompletion::replying(&generated(5)));
        CompletionQuestionSource::new(client.clone()).fetch(5).await;

        let prompts = client.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].starts_with("Generate exactly 5 multiple choice questions"));
        assert!(prompts[0].contains("answer_index"));
    }

    #[test]
    fn test_fallback_batch_fills_any_count() {
        assert_eq!(fallback_batch(5), fallback_questions());
        assert_eq!(fallback_batch(7).len(), 7);
        assert!(fallback_batch(0).is_empty());
    }
}
