//! JSON-over-HTTP plumbing shared by the Gemini and backend clients.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::CompletionError;

/// POST `body` as JSON and decode a JSON reply, classifying every failure.
pub(crate) async fn post_json<B, R>(client: &Client, url: &str, body: &B) -> Result<R, CompletionError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    // Errors are stripped of the URL, which may carry a credential.
    let response = client.post(url).json(body).send().await.map_err(|e| {
        let e = e.without_url();
        if e.is_connect() {
            CompletionError::network(format!("Connection failed: {}", e))
        } else {
            CompletionError::network(format!("Request failed: {}", e))
        }
    })?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| CompletionError::network(format!("Failed to read response: {}", e.without_url())))?;

    if !status.is_success() {
        let detail = serde_json::from_str::<ErrorEnvelope>(&text)
            .map(|envelope| envelope.error.message)
            .unwrap_or(text);
        return Err(CompletionError::bad_status(
            status.as_u16(),
            format!("HTTP {}: {}", status, detail),
        ));
    }

    serde_json::from_str(&text)
        .map_err(|e| CompletionError::malformed(format!("Failed to parse response: {}", e)))
}

/// `{"error": {"message": ...}}`, the error body Google APIs return.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}
