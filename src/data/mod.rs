mod fallback;
mod parse;

pub use fallback::fallback_questions;
pub use parse::{parse_question_batch, strip_code_fences};
