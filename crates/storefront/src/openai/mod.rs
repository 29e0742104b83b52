//! Text generation through an OpenAI-compatible chat completions API.
//!
//! The pricing engine only needs "send a system and a user message, get a
//! JSON object back as text". [`TextGenerator`] is that seam; [`OpenAiClient`]
//! is the production implementation and tests substitute scripted fakes.

mod client;
mod error;
pub mod types;

use futures::future::BoxFuture;

pub use client::OpenAiClient;
pub use error::{ApiError, ApiErrorResponse, GenerationError};

/// Something that can answer a prompt with a JSON object.
pub trait TextGenerator: Send + Sync {
    /// Ask for a single JSON object and return the raw reply text.
    ///
    /// The reply is not validated here; callers decide whether it is usable.
    fn generate_json<'a>(
        &'a self,
        system: &'a str,
        prompt: &'a str,
        max_tokens: u32,
    ) -> BoxFuture<'a, Result<String, GenerationError>>;
}
