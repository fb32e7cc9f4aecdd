//! Google Gemini `generateContent` client

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use super::http::post_json;
use super::{CompletionClient, CompletionError};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-lite";

const TEMPERATURE: f32 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 2000;

/// Direct client for the Gemini text API.
///
/// The key travels in the query string, so whoever runs this binary holds
/// the credential.
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: impl Into<String>, base_url: &str) -> Self {
        let model = model.into();
        let endpoint = format!(
            "{}/v1/models/{}:generateContent",
            base_url.trim_end_matches('/'),
            model
        );

        Self {
            client: Client::new(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            endpoint,
            model,
        }
    }

    fn build_request(prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        }
    }

    /// First text part of the first candidate.
    fn first_text(response: GeminiResponse) -> Result<String, CompletionError> {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| CompletionError::malformed("No text candidate in Gemini response"))
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let Some(api_key) = &self.api_key else {
            return Err(CompletionError::missing_credential(
                "GEMINI_API_KEY is not configured",
            ));
        };

        let url = Url::parse_with_params(&self.endpoint, &[("key", api_key.as_str())])
            .map_err(|e| CompletionError::network(format!("Invalid Gemini endpoint: {}", e)))?;
        let response: GeminiResponse =
            post_json(&self.client, url.as_str(), &Self::build_request(prompt)).await?;

        Self::first_text(response)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}
