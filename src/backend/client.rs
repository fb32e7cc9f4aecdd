//! HTTP client for the backend-delegated variant.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::Client;

use crate::chat::Assistant;
use crate::completion::http::post_json;
use crate::completion::CompletionError;
use crate::models::{QuizQuestion, QuizResult};
use crate::protocol::{ChatRequest, ChatResponse, GenerateRequest, SubmitRequest, PDF_PATH};
use crate::quiz::{percentage, score, settle_batch, Grader, QuestionSource};

/// Talks to a backend that owns the completion credential.
///
/// Implements every capability the direct variant does, so sessions can be
/// built on either without knowing which.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn pdf_url(&self) -> String {
        format!("{}{}", self.base_url, PDF_PATH)
    }

    pub async fn chat(&self, message: &str) -> Result<String, CompletionError> {
        let body = ChatRequest {
            message: message.to_string(),
        };
        let response: ChatResponse = post_json(&self.client, &self.url("/api/chat"), &body).await?;
        Ok(response.reply)
    }

    pub async fn generate_quiz(&self, count: usize) -> Result<Vec<QuizQuestion>, CompletionError> {
        let questions: Vec<QuizQuestion> = post_json(
            &self.client,
            &self.url("/api/quiz/generate"),
            &GenerateRequest { count },
        )
        .await?;
        Ok(questions.into_iter().filter(QuizQuestion::is_valid).collect())
    }

    pub async fn submit_quiz(&self, request: &SubmitRequest) -> Result<QuizResult, CompletionError> {
        post_json(&self.client, &self.url("/api/quiz/submit"), request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl QuestionSource for BackendClient {
    async fn fetch(&self, count: usize) -> Vec<QuizQuestion> {
        settle_batch(self.generate_quiz(count).await, count)
    }
}

#[async_trait]
impl Assistant for BackendClient {
    async fn reply(&self, message: &str) -> Result<String, CompletionError> {
        self.chat(message).await
    }
}

#[async_trait]
impl Grader for BackendClient {
    async fn grade(
        &self,
        name: &str,
        questions: &[QuizQuestion],
        selections: &BTreeMap<usize, usize>,
    ) -> QuizResult {
        let request = SubmitRequest::new(name, questions, selections);
        let outcome = self
            .submit_quiz(&request)
            .await
            .and_then(|result| check_result(result, questions.len()));
        match outcome {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(
                    kind = e.kind.as_str(),
                    error = %e.message,
                    "Backend grading failed; scoring locally"
                );
                score(name, questions, selections)
            }
        }
    }
}

/// Rejects a graded result whose totals disagree with the quiz that was sent.
fn check_result(result: QuizResult, total: usize) -> Result<QuizResult, CompletionError> {
    let consistent = result.total == total
        && result.score <= result.total
        && result.percentage == percentage(result.score, result.total)
        && result.detailed_results.len() == total;

    if consistent {
        Ok(result)
    } else {
        Err(CompletionError::malformed(format!(
            "Inconsistent result: score {} of {} at {}% with {} details for {} questions",
            result.score,
            result.total,
            result.percentage,
            result.detailed_results.len(),
            total
        )))
    }
}
