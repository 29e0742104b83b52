//! Integration tests for the OpenAI-compatible client.
//!
//! A stand-in chat completions server runs in-process. Each scenario lives
//! under its own path prefix, used as the client's base URL.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use cosmic_delivery_integration_tests::{
    TestServer, generation_config, serve_in_background, state_with,
};
use cosmic_delivery_storefront::openai::{GenerationError, OpenAiClient, TextGenerator};
use cosmic_delivery_storefront::pricing::PricingService;
use cosmic_delivery_storefront::store::MemoryCartStore;
use serde_json::{Value, json};

const QUOTE_REPLY: &str = r#"{"price": "₹45,00,000", "breakdown": {"Base Item Price": "₹500", "Wormhole Toll": "₹44,99,500"}}"#;

/// Requests the stand-in received, with their authorization header.
#[derive(Clone, Default)]
struct Recorded(Arc<Mutex<Vec<(Option<String>, Value)>>>);

impl Recorded {
    fn take(&self) -> Vec<(Option<String>, Value)> {
        std::mem::take(&mut *self.0.lock().expect("recorded lock"))
    }
}

async fn ok(State(recorded): State<Recorded>, headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    recorded.0.lock().expect("recorded lock").push((auth, body));

    Json(json!({
        "id": "chatcmpl-test",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": QUOTE_REPLY}}]
    }))
}

async fn rate_limited() -> impl IntoResponse {
    (StatusCode::TOO_MANY_REQUESTS, [("retry-after", "17")], "slow down")
}

async fn unauthorized() -> impl IntoResponse {
    (StatusCode::UNAUTHORIZED, Json(json!({"error": {"message": "bad key"}})))
}

async fn api_error() -> impl IntoResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"error": {"type": "invalid_request_error", "message": "Unknown model"}})),
    )
}

async fn empty_choices() -> Json<Value> {
    Json(json!({"id": "chatcmpl-empty", "choices": []}))
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    empty_choices().await
}

async fn stand_in() -> (SocketAddr, Recorded) {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/ok/v1/chat/completions", post(ok))
        .route("/limited/v1/chat/completions", post(rate_limited))
        .route("/unauthorized/v1/chat/completions", post(unauthorized))
        .route("/error/v1/chat/completions", post(api_error))
        .route("/empty/v1/chat/completions", post(empty_choices))
        .route("/slow/v1/chat/completions", post(slow))
        .with_state(recorded.clone());
    (serve_in_background(app).await, recorded)
}

fn client_for(addr: SocketAddr, scenario: &str) -> OpenAiClient {
    OpenAiClient::new(&generation_config(&format!("http://{addr}/{scenario}/v1/")))
        .expect("client")
}

#[tokio::test]
async fn test_chat_json_sends_json_object_request() {
    let (addr, recorded) = stand_in().await;
    let client = client_for(addr, "ok");

    let reply = client
        .chat_json("system text", "user text", 500)
        .await
        .expect("reply");
    assert_eq!(reply, QUOTE_REPLY);

    let requests = recorded.take();
    assert_eq!(requests.len(), 1);
    let (auth, body) = &requests[0];
    assert_eq!(auth.as_deref(), Some("Bearer sk-test-4f9a1c7e2b8d6053aa91"));
    assert_eq!(body["model"], "gpt-4o");
    assert_eq!(body["response_format"], json!({"type": "json_object"}));
    assert_eq!(body["max_tokens"], 500);
    assert_eq!(body["messages"][0], json!({"role": "system", "content": "system text"}));
    assert_eq!(body["messages"][1], json!({"role": "user", "content": "user text"}));
}

#[tokio::test]
async fn test_error_statuses_map_to_errors() {
    let (addr, _) = stand_in().await;

    let err = client_for(addr, "limited")
        .chat_json("s", "p", 10)
        .await
        .expect_err("rate limited");
    assert!(matches!(err, GenerationError::RateLimited(17)), "{err:?}");

    let err = client_for(addr, "unauthorized")
        .chat_json("s", "p", 10)
        .await
        .expect_err("unauthorized");
    assert!(matches!(err, GenerationError::Unauthorized(_)), "{err:?}");

    let err = client_for(addr, "error")
        .chat_json("s", "p", 10)
        .await
        .expect_err("api error");
    match err {
        GenerationError::Api {
            error_type,
            message,
        } => {
            assert_eq!(error_type, "invalid_request_error");
            assert_eq!(message, "Unknown model");
        }
        other => panic!("expected api error, got {other:?}"),
    }

    let err = client_for(addr, "empty")
        .chat_json("s", "p", 10)
        .await
        .expect_err("empty");
    assert!(matches!(err, GenerationError::EmptyReply), "{err:?}");
}

#[tokio::test]
async fn test_timeout_is_a_failed_call() {
    let (addr, _) = stand_in().await;
    let err = client_for(addr, "slow")
        .chat_json("s", "p", 10)
        .await
        .expect_err("timeout");
    assert!(matches!(err, GenerationError::Http(ref e) if e.is_timeout()), "{err:?}");
}

#[tokio::test]
async fn test_search_uses_live_client_reply() {
    let (addr, recorded) = stand_in().await;
    let generator = Arc::new(client_for(addr, "ok")) as Arc<dyn TextGenerator>;
    let server = TestServer::spawn(state_with(
        Arc::new(MemoryCartStore::new()),
        PricingService::new(Some(generator)),
    ))
    .await;

    let (status, body) = server
        .post_json(
            "/api/search",
            &json!({"query": "coffee", "planet": "Space Station", "agency": "express"}),
        )
        .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["price"], "₹45,00,000");
    assert_eq!(body["breakdown"]["Wormhole Toll"], "₹44,99,500");

    let requests = recorded.take();
    let prompt = requests[0].1["messages"][1]["content"]
        .as_str()
        .expect("prompt")
        .to_string();
    assert!(prompt.contains("coffee"));
    assert!(prompt.contains("Space Station Discount"));
}

#[tokio::test]
async fn test_search_falls_back_when_provider_fails() {
    let (addr, _) = stand_in().await;
    let generator = Arc::new(client_for(addr, "limited")) as Arc<dyn TextGenerator>;
    let server = TestServer::spawn(state_with(
        Arc::new(MemoryCartStore::new()),
        PricingService::new(Some(generator)),
    ))
    .await;

    let (status, body) = server
        .post_json(
            "/api/search",
            &json!({"query": "drink", "planet": "Saturn", "agency": "express"}),
        )
        .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["breakdown"].as_object().expect("breakdown").len(), 6);
}
