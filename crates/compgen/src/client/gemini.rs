use compgen_core::component::ResponseSchema;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::gemini;

use super::{ClientError, ModelClient};
use crate::config::GeminiConfig;

/// Gemini client with JSON-schema constrained output.
pub struct GeminiClient {
    client: gemini::Client,
    model: String,
}

impl GeminiClient {
    /// Create a client that authenticates every request with the configured key
    pub fn new(config: GeminiConfig) -> Result<Self, ClientError> {
        Self::with_http_client(config, reqwest::Client::default())
    }

    fn with_http_client(config: GeminiConfig, http: reqwest::Client) -> Result<Self, ClientError> {
        let client = gemini::Client::<reqwest::Client>::builder()
            .api_key(config.api_key)
            .base_url(&config.base_url)
            .http_client(http)
            .build()?;

        Ok(Self {
            client,
            model: config.model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl ModelClient for GeminiClient {
    async fn generate(&self, prompt: &str, schema: &ResponseSchema) -> Result<String, ClientError> {
        let output_schema = schemars::Schema::try_from(schema.as_value().clone())
            .map_err(|e| ClientError::InvalidSchema(e.to_string()))?;

        let agent = self
            .client
            .agent(&self.model)
            .output_schema_raw(output_schema)
            .build();

        log::debug!(
            "Requesting structured output from {} ({} prompt chars)",
            self.model,
            prompt.chars().count()
        );

        let text = agent.prompt(prompt).await?;

        log::debug!("Received {} chars from {}", text.chars().count(), self.model);

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response and hand back the raw request.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];

            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);

                let text = String::from_utf8_lossy(&request);
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if request.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            String::from_utf8_lossy(&request).into_owned()
        });

        (base_url, handle)
    }

    fn client(base_url: String) -> GeminiClient {
        let config = GeminiConfig {
            api_key: "test-key".to_string(),
            model: "gemini-test".to_string(),
            base_url,
        };
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        GeminiClient::with_http_client(config, http).unwrap()
    }

    #[tokio::test]
    async fn test_generate_returns_candidate_text() {
        let (base_url, handle) = serve_once(
            "200 OK",
            r#"{"responseId": "resp-1", "candidates": [{"content": {"role": "model", "parts": [{"text": "[]"}]}, "finishReason": "STOP"}]}"#,
        )
        .await;

        let text = client(base_url)
            .generate("a blue button", &ResponseSchema::file_records())
            .await
            .unwrap();
        assert_eq!(text, "[]");

        let request = handle.await.unwrap();
        assert!(request.starts_with("POST /v1beta/models/gemini-test:generateContent?key=test-key"));
        assert!(request.contains("\"responseMimeType\":\"application/json\""));
        assert!(request.contains("\"responseJsonSchema\""));
        assert!(request.contains("a blue button"));
    }

    #[tokio::test]
    async fn test_generate_surfaces_api_error() {
        let (base_url, handle) = serve_once(
            "429 Too Many Requests",
            r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#,
        )
        .await;

        let err = client(base_url)
            .generate("a blue button", &ResponseSchema::file_records())
            .await
            .unwrap_err();
        handle.await.unwrap();

        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "Quota exceeded (RESOURCE_EXHAUSTED)");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_generate_without_candidates() {
        let (base_url, handle) = serve_once(
            "200 OK",
            r#"{"responseId": "resp-2", "candidates": [], "promptFeedback": {"blockReason": "SAFETY"}}"#,
        )
        .await;

        let err = client(base_url)
            .generate("a blue button", &ResponseSchema::file_records())
            .await
            .unwrap_err();
        handle.await.unwrap();

        assert!(matches!(err, ClientError::EmptyResponse(_)));
    }
}
