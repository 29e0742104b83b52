//! Cosmic Delivery Storefront library.
//!
//! This crate provides the storefront API as a library, allowing it to be
//! tested and reused by the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod openai;
pub mod pricing;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

use axum::Router;
use tower_http::trace::TraceLayer;

use middleware::rate_limit::RateLimiterLayer;
use state::AppState;

/// Build the API router without rate limiting.
pub fn app(state: AppState) -> Router {
    router(state, None)
}

/// Build the API router.
///
/// When `pricing_limit` is set it is applied to the pricing routes only. Its
/// key extractor needs either a proxy header or `ConnectInfo`, so serve the
/// router with `into_make_service_with_connect_info`.
pub fn router(state: AppState, pricing_limit: Option<RateLimiterLayer>) -> Router {
    let pricing = match pricing_limit {
        Some(limit) => routes::pricing_routes().layer(limit),
        None => routes::pricing_routes(),
    };

    Router::new()
        .merge(routes::health_routes())
        .nest("/api", routes::api_routes().merge(pricing))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
