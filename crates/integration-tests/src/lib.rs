//! Integration tests for Cosmic Delivery.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cosmic-delivery-integration-tests
//! ```
//!
//! Every test serves the storefront router in-process on an ephemeral port
//! and talks to it over HTTP with `reqwest`. No external services are
//! needed: text generation is either disabled or answered by a scripted
//! fake or a local stand-in server.
//!
//! # Test Categories
//!
//! - `storefront_api` - Catalog, pricing, cart, and session endpoints
//! - `local_store` - Cart persistence in a local directory
//! - `generation_client` - OpenAI-compatible client against a stand-in server

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use cosmic_delivery_storefront::catalog::Catalog;
use cosmic_delivery_storefront::config::GenerationConfig;
use cosmic_delivery_storefront::middleware::rate_limit::RateLimiterLayer;
use cosmic_delivery_storefront::openai::{GenerationError, TextGenerator};
use cosmic_delivery_storefront::pricing::PricingService;
use cosmic_delivery_storefront::state::AppState;
use cosmic_delivery_storefront::store::{CartStore, MemoryCartStore};
use futures::future::BoxFuture;
use secrecy::SecretString;
use tokio::net::TcpListener;
use url::Url;

/// A storefront served on `127.0.0.1` for the lifetime of the test.
pub struct TestServer {
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestServer {
    /// Serve `state` without rate limiting.
    pub async fn spawn(state: AppState) -> Self {
        Self::serve(cosmic_delivery_storefront::app(state)).await
    }

    /// Serve `state` with `limit` applied to the pricing routes.
    pub async fn spawn_rate_limited(state: AppState, limit: RateLimiterLayer) -> Self {
        Self::serve(cosmic_delivery_storefront::router(state, Some(limit))).await
    }

    async fn serve(app: Router) -> Self {
        let addr = serve_in_background(app).await;
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: format!("http://{addr}"),
        }
    }

    /// Absolute URL for a path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a JSON POST and return status and parsed body.
    pub async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> (reqwest::StatusCode, serde_json::Value) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send request");
        read_json(resp).await
    }

    /// Send a GET and return status and parsed body.
    pub async fn get_json(&self, path: &str) -> (reqwest::StatusCode, serde_json::Value) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send request");
        read_json(resp).await
    }

    /// Send a DELETE and return status and parsed body.
    pub async fn delete_json(&self, path: &str) -> (reqwest::StatusCode, serde_json::Value) {
        let resp = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to send request");
        read_json(resp).await
    }
}

async fn read_json(resp: reqwest::Response) -> (reqwest::StatusCode, serde_json::Value) {
    let status = resp.status();
    let body = resp.json().await.expect("Response was not JSON");
    (status, body)
}

/// Bind an ephemeral port and serve `app` on a background task.
///
/// Serves with `ConnectInfo` so IP-keyed rate limiting works.
pub async fn serve_in_background(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Test server failed");
    });

    addr
}

/// State with the seeded catalog, `store`, and `pricing`.
pub fn state_with(store: Arc<dyn CartStore>, pricing: PricingService) -> AppState {
    AppState::from_parts(Catalog::seeded(), store, pricing)
}

/// State with an in-memory cart and formula-only pricing.
pub fn fallback_state() -> AppState {
    state_with(
        Arc::new(MemoryCartStore::new()),
        PricingService::fallback_only(),
    )
}

/// Generation settings pointing at a local stand-in server.
pub fn generation_config(base_url: &str) -> GenerationConfig {
    GenerationConfig {
        api_key: SecretString::from("sk-test-4f9a1c7e2b8d6053aa91"),
        model: "gpt-4o".to_string(),
        base_url: Url::parse(base_url).expect("Invalid stand-in URL"),
        timeout: Duration::from_secs(2),
    }
}

/// Text generator that answers with canned replies in order.
///
/// Once the script runs out every call fails with `EmptyReply`.
#[derive(Default)]
pub struct ScriptedGenerator {
    replies: Mutex<Vec<Result<String, GenerationError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    /// Script the given replies, first reply first.
    pub fn new(replies: Vec<Result<String, GenerationError>>) -> Arc<Self> {
        let mut replies = replies;
        replies.reverse();
        Arc::new(Self {
            replies: Mutex::new(replies),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// User prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompts lock").clone()
    }
}

impl TextGenerator for ScriptedGenerator {
    fn generate_json<'a>(
        &'a self,
        _system: &'a str,
        prompt: &'a str,
        _max_tokens: u32,
    ) -> BoxFuture<'a, Result<String, GenerationError>> {
        self.prompts
            .lock()
            .expect("prompts lock")
            .push(prompt.to_string());
        let reply = self
            .replies
            .lock()
            .expect("replies lock")
            .pop()
            .unwrap_or(Err(GenerationError::EmptyReply));
        Box::pin(async move { reply })
    }
}
