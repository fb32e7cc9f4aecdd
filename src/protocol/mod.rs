mod messages;

pub use messages::{
    validate_name, ChatRequest, ChatResponse, GenerateRequest, SubmitRequest, NAME_MAX_LENGTH,
    PDF_PATH,
};
