//! Search and compare handlers.
//!
//! Both always answer with a price: generation failures fall back inside
//! the pricing engine. Only missing input is an error.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use cosmic_delivery_core::{Breakdown, PlanetPrices, Product};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb, json_body};
use crate::pricing::{SUN_MESSAGE, SearchOutcome, capitalize};
use crate::state::AppState;

/// `POST /api/search` body.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub planet: Option<String>,
    #[serde(default)]
    pub agency: Option<String>,
}

/// Response when the destination is the sun.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SunResponse {
    pub is_sun: bool,
    pub message: &'static str,
}

/// A priced search.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub item: String,
    pub planet: String,
    pub agency: String,
    pub price: String,
    pub breakdown: Breakdown,
    /// Virtual product ready to be added to a cart.
    pub product: Product,
}

/// `POST /api/compare` body.
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub item: Option<String>,
}

/// Prices for one item across the comparison planets.
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub item: String,
    pub prices: PlanetPrices,
}

/// A present, non-blank field, trimmed.
fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Price delivery of an item to a planet.
#[instrument(skip(state, body))]
pub async fn search(
    State(state): State<AppState>,
    body: std::result::Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Response> {
    const MISSING: &str = "Missing required fields";
    let request = json_body(body, MISSING)?;

    let (Some(item), Some(planet), Some(agency)) = (
        required(request.query),
        required(request.planet),
        required(request.agency),
    ) else {
        return Err(AppError::BadRequest(MISSING.to_string()));
    };

    add_breadcrumb("pricing", "Search", Some(&[("item", item.as_str()), ("planet", planet.as_str())]));

    let quote = match state.pricing().search(&item, &planet, &agency).await {
        SearchOutcome::Sun => {
            return Ok(Json(SunResponse {
                is_sun: true,
                message: SUN_MESSAGE,
            })
            .into_response());
        }
        SearchOutcome::Quote(quote) => quote,
    };

    let planet = capitalize(&planet);
    let agency = capitalize(&agency);
    let product = quote.to_virtual_product(&item, &planet);

    Ok(Json(QuoteResponse {
        item,
        planet,
        agency,
        price: quote.price,
        breakdown: quote.breakdown,
        product,
    })
    .into_response())
}

/// Compare delivery prices across planets.
#[instrument(skip(state, body))]
pub async fn compare(
    State(state): State<AppState>,
    body: std::result::Result<Json<CompareRequest>, JsonRejection>,
) -> Result<Json<CompareResponse>> {
    const MISSING: &str = "Item is required";
    let request = json_body(body, MISSING)?;
    let item = required(request.item).ok_or_else(|| AppError::BadRequest(MISSING.to_string()))?;

    let prices = state.pricing().generate_comparison(&item).await;
    Ok(Json(CompareResponse { item, prices }))
}
