//! Readable messages from Gemini API error bodies.

use serde::Deserialize;

/// Error envelope returned by Google APIs on non-success status codes.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Turn an error response body into a readable message.
///
/// Falls back to the raw body when it is not the standard error envelope.
pub fn format_api_error(body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.status {
            Some(status) => format!("{} ({})", envelope.error.message, status),
            None => envelope.error.message,
        },
        Err(_) => body.trim().to_string(),
    }
}
