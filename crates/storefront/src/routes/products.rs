//! Catalog route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use cosmic_delivery_core::{Product, ProductId, SessionId};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List standard products in catalog order.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog().products().cloned().collect())
}

/// List planet-exclusive products in catalog order.
#[instrument(skip(state))]
pub async fn exclusive(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog().exclusive_products().cloned().collect())
}

/// `GET /api/products/{id}` query.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowQuery {
    /// Session whose virtual products are also searched.
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Show one product.
///
/// Without a session only the catalog is searched. With one, products
/// registered in that session's cart resolve too.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ShowQuery>,
) -> Result<Json<Product>> {
    let product = match query.session_id.filter(|s| !s.trim().is_empty()) {
        Some(session_id) => {
            state
                .cart()
                .resolve_product(&SessionId::new(session_id), &ProductId::new(id))
                .await?
        }
        None => state.catalog().get(&id).cloned(),
    };
    product
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
}
