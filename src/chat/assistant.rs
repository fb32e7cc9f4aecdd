use std::sync::Arc;

use async_trait::async_trait;

use crate::completion::{CompletionClient, CompletionError};

/// Fixed instruction every direct chat prompt is framed with.
const ON_TOPIC_INSTRUCTION: &str = "You are a knowledgeable assistant for the Rig Vedha Knowledge Portal. \
Answer questions about Rig Vedha: its hymns, deities, structure, philosophy, and historical significance. \
If a question is unrelated to Rig Vedha, politely steer the conversation back to Rig Vedha. \
Keep answers clear and concise.";

/// Produces the assistant side of a chat exchange.
#[async_trait]
pub trait Assistant: Send + Sync {
    async fn reply(&self, message: &str) -> Result<String, CompletionError>;
}

/// Frames the user's message with the on-topic instruction and asks a
/// completion service.
pub struct CompletionAssistant {
    client: Arc<dyn CompletionClient>,
}

impl CompletionAssistant {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Assistant for CompletionAssistant {
    async fn reply(&self, message: &str) -> Result<String, CompletionError> {
        self.client.complete(&frame_prompt(message)).await
    }
}

fn frame_prompt(message: &str) -> String {
    format!("{}\n\nQuestion: {}", ON_TOPIC_INSTRUCTION, message.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeCompletion;

    #[tokio::test]
    async fn test_prompt_is_framed() {
        let client = Arc::new(FakeCompletion::replying("The Nasadiya Sukta."));
        let assistant = CompletionAssistant::new(client.clone());

        let reply = assistant.reply("  Explain the creation hymn ").await.unwrap();
        assert_eq!(reply, "The Nasadiya Sukta.");

        let prompts = client.prompts();
        assert!(prompts[0].starts_with(ON_TOPIC_INSTRUCTION));
        assert!(prompts[0].ends_with("Question: Explain the creation hymn"));
    }
}
