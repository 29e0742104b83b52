//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                          - Liveness probe
//! GET    /health/ready                    - Readiness probe (cart store)
//!
//! # Catalog
//! GET    /api/products                    - Standard products
//! GET    /api/products/exclusive          - Planet-exclusive products
//! GET    /api/products/{id}               - One product (404 if unknown)
//!        ?sessionId=                      - Also search that session's virtual products
//!
//! # Pricing (rate limited in the binary)
//! POST   /api/search                      - Cosmic price for {query, planet, agency}
//! POST   /api/compare                     - Prices across planets for {item}
//!
//! # Cart
//! POST   /api/session                     - Issue a session id
//! GET    /api/cart/{sessionId}            - Resolved cart entries
//! POST   /api/cart                        - Add {productId, sessionId, product?}
//! DELETE /api/cart/{sessionId}/{productId} - Remove one product
//! DELETE /api/cart/{sessionId}            - Clear the cart
//! ```

pub mod cart;
pub mod health;
pub mod pricing;
pub mod products;
pub mod session;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Health probe routes.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
}

/// Catalog, cart, and session routes, relative to `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index))
        .route("/products/exclusive", get(products::exclusive))
        .route("/products/{id}", get(products::show))
        .route("/session", post(session::create))
        .route("/cart", post(cart::add))
        .route("/cart/{session_id}", get(cart::index).delete(cart::clear))
        .route("/cart/{session_id}/{product_id}", delete(cart::remove))
}

/// Pricing routes, relative to `/api`.
pub fn pricing_routes() -> Router<AppState> {
    Router::new()
        .route("/search", post(pricing::search))
        .route("/compare", post(pricing::compare))
}
