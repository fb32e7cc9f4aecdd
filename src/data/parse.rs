use crate::completion::CompletionError;
use crate::models::QuizQuestion;

/// Removes markdown code fences the completion service likes to wrap JSON in.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parses a completion payload into question items.
///
/// The payload must be a JSON array of the question shape, optionally fenced.
/// Items that fail validation are dropped here; the caller decides whether
/// what remains is enough.
pub fn parse_question_batch(text: &str) -> Result<Vec<QuizQuestion>, CompletionError> {
    let cleaned = strip_code_fences(text);
    let questions: Vec<QuizQuestion> = serde_json::from_str(&cleaned).map_err(|e| {
        CompletionError::malformed(format!("Quiz payload is not a question array: {}", e))
    })?;

    Ok(questions.into_iter().filter(QuizQuestion::is_valid).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::CompletionErrorKind;

    const ONE_QUESTION: &str = r#"[{"q": "Q1", "options": ["a", "b", "c", "d"], "answer_index": 2, "explanation": "c"}]"#;

    #[test]
    fn test_strip_code_fences() {
        let fenced = format!("```json\n{}\n```", ONE_QUESTION);
        assert_eq!(strip_code_fences(&fenced), ONE_QUESTION);
        assert_eq!(strip_code_fences("  plain  "), "plain");
    }

    #[test]
    fn test_parse_fenced_batch() {
        let fenced = format!("```json\n{}\n```", ONE_QUESTION);
        let questions = parse_question_batch(&fenced).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_option, 2);
    }

    #[test]
    fn test_parse_drops_invalid_items() {
        let json = r#"[
            {"q": "ok", "options": ["a", "b", "c", "d"], "answer_index": 1},
            {"q": "bad", "options": ["a", "b", "c", "d"], "answer_index": 9}
        ]"#;
        let questions = parse_question_batch(json).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].prompt, "ok");
    }

    #[test]
    fn test_parse_malformed() {
        let err = parse_question_batch("Here are your questions!").unwrap_err();
        assert_eq!(err.kind, CompletionErrorKind::MalformedPayload);

        let err = parse_question_batch(r#"{"q": "not an array"}"#).unwrap_err();
        assert_eq!(err.kind, CompletionErrorKind::MalformedPayload);
    }
}
