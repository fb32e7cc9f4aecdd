mod chat;
mod question;
mod result;

pub use chat::{ChatEntry, Speaker};
pub use question::{QuizQuestion, NUM_OPTIONS};
pub use result::{QuestionOutcome, QuizResult, NOT_ANSWERED};
