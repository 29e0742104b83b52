//! Error types for the text-generation client.

use thiserror::Error;

/// Errors that can occur when calling the chat completions API.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// HTTP request failed, including connect errors and timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned an error body.
    #[error("API error ({error_type}): {message}")]
    Api {
        /// Error type from the API.
        error_type: String,
        /// Error message.
        message: String,
    },

    /// Rate limited by the API.
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication failed.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Failed to parse response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The response carried no choices or no message content.
    #[error("empty reply")]
    EmptyReply,

    /// The client could not be constructed.
    #[error("client setup error: {0}")]
    Setup(String),
}

/// Error body returned by OpenAI-compatible APIs.
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorResponse {
    /// Nested error details.
    pub error: ApiError,
}

/// Nested error details.
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    /// Error type (`invalid_request_error`, `insufficient_quota`, ...).
    #[serde(rename = "type", default = "unknown_error_type")]
    pub error_type: String,
    /// Error message.
    pub message: String,
}

fn unknown_error_type() -> String {
    "unknown".to_string()
}
