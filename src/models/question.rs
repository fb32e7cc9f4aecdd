use serde::{Deserialize, Serialize};

/// Number of answer options every question carries.
pub const NUM_OPTIONS: usize = 4;

/// One multiple-choice item with four options and a known correct index.
///
/// Field names on the wire follow the shape the completion service is asked
/// to produce: `q`, `options`, `answer_index`, `explanation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    #[serde(rename = "q")]
    pub prompt: String,
    pub options: [String; NUM_OPTIONS],
    #[serde(rename = "answer_index")]
    pub correct_option: usize,
    #[serde(default)]
    pub explanation: String,
}

impl QuizQuestion {
    pub fn new(
        prompt: impl Into<String>,
        options: [&str; NUM_OPTIONS],
        correct_option: usize,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.map(str::to_string),
            correct_option,
            explanation: explanation.into(),
        }
    }

    /// True when the answer key points at an existing option.
    pub fn is_valid(&self) -> bool {
        self.correct_option < NUM_OPTIONS && !self.prompt.trim().is_empty()
    }

    pub fn option_text(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    pub fn correct_text(&self) -> &str {
        self.option_text(self.correct_option).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_names() {
        let json = r#"{
            "q": "Which deity is invoked in the first hymn?",
            "options": ["Agni", "Indra", "Varuna", "Soma"],
            "answer_index": 0
        }"#;
        let question: QuizQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(question.prompt, "Which deity is invoked in the first hymn?");
        assert_eq!(question.correct_text(), "Agni");
        assert!(question.explanation.is_empty());
        assert!(question.is_valid());
    }

    #[test]
    fn test_rejects_wrong_option_count() {
        let json = r#"{"q": "?", "options": ["a", "b", "c"], "answer_index": 0}"#;
        assert!(serde_json::from_str::<QuizQuestion>(json).is_err());
    }

    #[test]
    fn test_out_of_range_answer_is_invalid() {
        let question = QuizQuestion::new("Q", ["a", "b", "c", "d"], 4, "");
        assert!(!question.is_valid());
        assert_eq!(question.correct_text(), "");
    }
}
