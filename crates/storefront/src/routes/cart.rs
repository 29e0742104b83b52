//! Cart route handlers.
//!
//! Carts are keyed by a client-held session id; there is no server session.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use cosmic_delivery_core::{CartEntry, CartItem, Product, ProductId, SessionId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb, json_body};
use crate::state::AppState;

const INVALID_CART_ITEM: &str = "Invalid cart item data";

/// `POST /api/cart` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    /// Virtual product payload from a search.
    #[serde(default)]
    pub product: Option<Product>,
}

/// Acknowledgement body for deletes.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub message: &'static str,
}

/// List a session's cart with resolved products.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<CartEntry>>> {
    let entries = state.cart().list_cart(&SessionId::new(session_id)).await?;
    Ok(Json(entries))
}

/// Add a product to a session's cart.
#[instrument(skip(state, body))]
pub async fn add(
    State(state): State<AppState>,
    body: std::result::Result<Json<AddToCartRequest>, JsonRejection>,
) -> Result<Json<CartItem>> {
    let request = json_body(body, INVALID_CART_ITEM)?;

    let (Some(product_id), Some(session_id)) = (
        request.product_id.filter(|id| !id.trim().is_empty()),
        request.session_id.filter(|id| !id.trim().is_empty()),
    ) else {
        return Err(AppError::BadRequest(INVALID_CART_ITEM.to_string()));
    };

    add_breadcrumb("cart", "Added to cart", Some(&[("product_id", product_id.as_str())]));

    let item = state
        .cart()
        .add_to_cart(
            &SessionId::new(session_id),
            &ProductId::new(product_id),
            request.product,
        )
        .await?;
    Ok(Json(item))
}

/// Remove a product from a session's cart.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path((session_id, product_id)): Path<(String, String)>,
) -> Result<Json<Ack>> {
    state
        .cart()
        .remove_from_cart(&SessionId::new(session_id), &ProductId::new(product_id))
        .await?;
    Ok(Json(Ack {
        message: "Item removed from cart",
    }))
}

/// Remove everything from a session's cart.
#[instrument(skip(state))]
pub async fn clear(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Ack>> {
    state.cart().clear_cart(&SessionId::new(session_id)).await?;
    Ok(Json(Ack {
        message: "Cart cleared",
    }))
}
