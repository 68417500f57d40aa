use compgen_core::component::{parse_file_records, FileRecord, ParseError, ResponseSchema};
use compgen_core::gemini::format_api_error;
use rig::completion::{CompletionError, PromptError};
use rig::http_client;

pub mod gemini;

pub use gemini::GeminiClient;

/// Errors raised by a model client. Callers treat them as one opaque
/// generation failure; the variants only shape the message.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Failed to create model client: {0}")]
    Build(#[from] http_client::Error),

    #[error("Invalid response schema: {0}")]
    InvalidSchema(String),

    #[error("Request failed: {0}")]
    Request(#[source] PromptError),

    #[error("API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Model returned no content: {0}")]
    EmptyResponse(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(#[from] ParseError),
}

impl From<PromptError> for ClientError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::CompletionError(CompletionError::HttpError(
                http_client::Error::InvalidStatusCodeWithMessage(status, body),
            )) => ClientError::Api {
                status: status.as_u16(),
                message: format_api_error(&body),
            },
            PromptError::CompletionError(CompletionError::HttpError(
                http_client::Error::InvalidStatusCode(status),
            )) => ClientError::Api {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_string(),
            },
            PromptError::CompletionError(CompletionError::ResponseError(reason)) => {
                ClientError::EmptyResponse(reason)
            }
            other => ClientError::Request(other),
        }
    }
}

/// Capability to generate content from a prompt.
pub trait ModelClient {
    /// Send one request and return the raw model text.
    async fn generate(&self, prompt: &str, schema: &ResponseSchema) -> Result<String, ClientError>;

    /// Send one request and deserialize the response into file records.
    async fn generate_structured(
        &self,
        prompt: &str,
        schema: &ResponseSchema,
    ) -> Result<Vec<FileRecord>, ClientError> {
        let raw = self.generate(prompt, schema).await?;
        Ok(parse_file_records(&raw)?)
    }
}
