//! Portal configuration, built once at startup and passed down explicitly.

use clap::ValueEnum;

use crate::completion::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use crate::protocol::PDF_PATH;
use crate::quiz::QUIZ_LENGTH;

/// Default backend address, also where the PDF is served from.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Which implementation of the portal's capabilities to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Call the completion service directly with a local API key.
    Direct,
    /// Delegate chat, quiz generation and grading to the backend.
    Backend,
}

#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub mode: Mode,
    pub api_key: Option<String>,
    pub model: String,
    pub completion_base_url: String,
    pub backend_url: String,
    pub pdf_url: Option<String>,
    pub question_count: usize,
}

impl PortalConfig {
    /// The document shown by the PDF window: the override if one was given,
    /// otherwise the backend's document route.
    pub fn resolved_pdf_url(&self) -> String {
        match &self.pdf_url {
            Some(url) => url.clone(),
            None => format!("{}{}", self.backend_url.trim_end_matches('/'), PDF_PATH),
        }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Direct,
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            completion_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            pdf_url: None,
            question_count: QUIZ_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_url_resolution() {
        let mut config = PortalConfig::default();
        assert_eq!(config.resolved_pdf_url(), "http://localhost:5000/api/pdf");

        config.backend_url = "https://vedha.example/".into();
        assert_eq!(config.resolved_pdf_url(), "https://vedha.example/api/pdf");

        config.pdf_url = Some("https://cdn.example/rigveda.pdf".into());
        assert_eq!(config.resolved_pdf_url(), "https://cdn.example/rigveda.pdf");
    }
}
