//! Chat completions client for OpenAI-compatible APIs.

use std::sync::Arc;

use futures::future::BoxFuture;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use crate::config::GenerationConfig;

use super::TextGenerator;
use super::error::{ApiErrorResponse, GenerationError};
use super::types::{ChatRequest, ChatResponse, Message, ResponseFormat};

const DEFAULT_TEMPERATURE: f32 = 0.8;
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Chat completions client.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct OpenAiClient {
    inner: Arc<OpenAiClientInner>,
}

struct OpenAiClientInner {
    client: reqwest::Client,
    model: String,
    endpoint: String,
}

impl OpenAiClient {
    /// Create a new client.
    ///
    /// The configured timeout covers the whole request, connect through body.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::Setup` if the API key is not a valid header
    /// value or the HTTP client cannot be built.
    pub fn new(config: &GenerationConfig) -> Result<Self, GenerationError> {
        let bearer = format!("Bearer {}", config.api_key.expose_secret());
        let mut auth_value = HeaderValue::from_str(&bearer)
            .map_err(|_| GenerationError::Setup("API key is not a valid header value".to_string()))?;
        auth_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, auth_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerationError::Setup(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(OpenAiClientInner {
                client,
                model: config.model.clone(),
                endpoint: chat_completions_url(config.base_url.as_str()),
            }),
        })
    }

    /// Model ID requests are sent with.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.inner.model
    }

    /// Send one system + user exchange and return the reply text.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a
    /// non-success status, or the reply carries no content.
    #[instrument(skip(self, system, prompt), fields(model = %self.inner.model))]
    pub async fn chat_json(
        &self,
        system: &str,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<String, GenerationError> {
        let request = ChatRequest {
            model: self.inner.model.clone(),
            messages: vec![Message::system(system), Message::user(prompt)],
            response_format: ResponseFormat::JSON_OBJECT,
            max_tokens,
            temperature: DEFAULT_TEMPERATURE,
        };

        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .json(&request)
            .send()
            .await?;

        let chat = self.handle_response(response).await?;
        tracing::debug!(response_id = ?chat.id, "Chat completion received");
        chat.first_content()
            .map(str::to_string)
            .ok_or(GenerationError::EmptyReply)
    }

    /// Handle a response of any status.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<ChatResponse, GenerationError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body)
                .map_err(|e| GenerationError::Parse(format!("Failed to parse response: {e}")))
        } else {
            Err(self.handle_error_status(status, response).await)
        }
    }

    /// Handle an error status code.
    async fn handle_error_status(
        &self,
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> GenerationError {
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
            return GenerationError::RateLimited(retry_after);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return GenerationError::Unauthorized("Invalid API key".to_string());
        }

        match response.text().await {
            Ok(body) => match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(api_error) => GenerationError::Api {
                    error_type: api_error.error.error_type,
                    message: api_error.error.message,
                },
                Err(_) => GenerationError::Api {
                    error_type: format!("http_{}", status.as_u16()),
                    message: body,
                },
            },
            Err(e) => GenerationError::Http(e),
        }
    }
}

impl TextGenerator for OpenAiClient {
    fn generate_json<'a>(
        &'a self,
        system: &'a str,
        prompt: &'a str,
        max_tokens: u32,
    ) -> BoxFuture<'a, Result<String, GenerationError>> {
        Box::pin(self.chat_json(system, prompt, max_tokens))
    }
}

/// Append the chat completions path to a base URL.
fn chat_completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use secrecy::SecretString;
    use url::Url;

    use super::*;

    fn config(key: &str) -> GenerationConfig {
        GenerationConfig {
            api_key: SecretString::from(key),
            model: "gpt-4o".to_string(),
            base_url: Url::parse("https://api.openai.com/v1/").expect("url"),
            timeout: Duration::from_secs(8),
        }
    }

    #[test]
    fn test_chat_completions_url() {
        assert_eq!(
            chat_completions_url("https://api.openai.com/v1"),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            chat_completions_url("http://127.0.0.1:9000/v1/"),
            "http://127.0.0.1:9000/v1/chat/completions"
        );
    }

    #[test]
    fn test_new_client() {
        let client = OpenAiClient::new(&config("sk-proj-aB3xY9mK2nL5pQ7rT0uW4zC6")).expect("client");
        assert_eq!(client.model(), "gpt-4o");
        assert_eq!(
            client.inner.endpoint,
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_new_client_rejects_header_breaking_key() {
        let result = OpenAiClient::new(&config("sk-bad\nkey"));
        assert!(matches!(result, Err(GenerationError::Setup(_))));
    }

    #[test]
    fn test_openai_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<OpenAiClient>();
    }
}
