//! Completion error types

use thiserror::Error;

/// Failure talking to a completion service or backend, with classification.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CompletionError {
    pub kind: CompletionErrorKind,
    pub message: String,
    pub status: Option<u16>,
}

impl CompletionError {
    pub fn new(kind: CompletionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(CompletionErrorKind::Network, message)
    }

    pub fn bad_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            ..Self::new(CompletionErrorKind::BadStatus, message)
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(CompletionErrorKind::MalformedPayload, message)
    }

    pub fn missing_credential(message: impl Into<String>) -> Self {
        Self::new(CompletionErrorKind::MissingCredential, message)
    }
}

/// Error classification. Every kind is handled the same way at the boundary
/// (log and substitute a default); the kind only feeds diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionErrorKind {
    /// Request could not be sent or the body could not be read
    Network,
    /// Non-2xx HTTP status
    BadStatus,
    /// Body was not JSON or lacked an expected field
    MalformedPayload,
    /// No API key configured for the completion service
    MissingCredential,
}

impl CompletionErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::BadStatus => "bad_status",
            Self::MalformedPayload => "malformed_payload",
            Self::MissingCredential => "missing_credential",
        }
    }
}
