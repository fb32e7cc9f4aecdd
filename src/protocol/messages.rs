//! Wire messages for the backend-delegated variant.
//!
//! All bodies are JSON over HTTP.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::QuizQuestion;

/// `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply to `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// `POST /api/quiz/generate`; the reply is a bare array of questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub count: usize,
}

/// `POST /api/quiz/submit`; the reply is a `QuizResult`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub name: String,
    /// One slot per question, `null` where nothing was chosen.
    pub answers: Vec<Option<usize>>,
    pub questions: Vec<QuizQuestion>,
}

impl SubmitRequest {
    pub fn new(name: &str, questions: &[QuizQuestion], selections: &BTreeMap<usize, usize>) -> Self {
        Self {
            name: name.to_string(),
            answers: (0..questions.len())
                .map(|index| selections.get(&index).copied())
                .collect(),
            questions: questions.to_vec(),
        }
    }
}

/// Longest name the entry field accepts.
pub const NAME_MAX_LENGTH: usize = 32;

/// Document route relative to the backend base URL.
pub const PDF_PATH: &str = "/api/pdf";

/// Validates a respondent name.
///
/// Returns `Ok(())` if valid, or `Err` with a message for the user.
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Please enter your name for the result");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fallback_questions;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Asha").is_ok());
        assert!(validate_name(" a ").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name(" \t ").is_err());
    }

    #[test]
    fn test_submit_request_serialization() {
        let questions = fallback_questions();
        let selections = BTreeMap::from([(0, 0), (3, 2)]);
        let request = SubmitRequest::new("Asha", &questions, &selections);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["name"], "Asha");
        assert_eq!(json["answers"], serde_json::json!([0, null, null, 2, null]));
        assert_eq!(json["questions"][1]["q"], "How many mandalas (books) are in Rig Vedha?");
        assert_eq!(json["questions"][1]["answer_index"], 0);
    }

    #[test]
    fn test_chat_messages() {
        let json = serde_json::to_string(&ChatRequest { message: "hi".into() }).unwrap();
        assert_eq!(json, r#"{"message":"hi"}"#);

        let reply: ChatResponse = serde_json::from_str(r#"{"reply": "Namaste"}"#).unwrap();
        assert_eq!(reply.reply, "Namaste");
        assert!(serde_json::from_str::<ChatResponse>(r#"{"message": "x"}"#).is_err());
    }
}
