use crate::models::QuizQuestion;

/// Hard-coded question bank used whenever the completion service cannot
/// supply a usable batch. Every answer key is index 0.
pub fn fallback_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::new(
            "What is Rig Vedha?",
            [
                "Ancient Hindu scripture",
                "Modern philosophy book",
                "Scientific text",
                "Historical novel",
            ],
            0,
            "Rig Vedha is the oldest of the four Vedas, composed in Vedic Sanskrit around 1500-1200 BCE.",
        ),
        QuizQuestion::new(
            "How many mandalas (books) are in Rig Vedha?",
            ["10", "7", "5", "12"],
            0,
            "Rig Vedha is organized into 10 mandalas containing 1,028 hymns (suktas).",
        ),
        QuizQuestion::new(
            "Which language is Rig Vedha originally written in?",
            ["Vedic Sanskrit", "Hindi", "Tamil", "Pali"],
            0,
            "Rig Vedha was composed in Vedic Sanskrit, an early form of the Sanskrit language.",
        ),
        QuizQuestion::new(
            "Rig Vedha is part of which collection?",
            ["The Four Vedas", "Upanishads", "Puranas", "Sutras"],
            0,
            "Rig Vedha is the first and oldest of the four Vedas (Rig, Yajur, Sama, Atharva).",
        ),
        QuizQuestion::new(
            "What is the main content of Rig Vedha?",
            [
                "Hymns to deities",
                "Historical events",
                "Scientific theories",
                "Moral stories",
            ],
            0,
            "Rig Vedha primarily contains hymns dedicated to various deities like Agni, Indra, Varuna, and Surya.",
        ),
    ]
}
