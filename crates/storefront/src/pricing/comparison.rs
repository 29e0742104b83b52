//! Multi-planet price comparison.

use std::collections::HashMap;

use cosmic_delivery_core::{PlanetPrices, Rupees};
use rand::Rng;
use thiserror::Error;

use super::destination::{COMPARISON_PLANETS, distance_multiplier};
use super::estimator::estimate_base_price_with;

/// Token cap for comparison replies.
pub const MAX_TOKENS: u32 = 300;

/// Why a comparison reply could not be used.
#[derive(Debug, Error)]
pub enum UnusableComparison {
    #[error("reply is not a JSON object: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("reply has no string price for {0}")]
    MissingPlanet(&'static str),
}

/// Validate a generator reply.
///
/// Every comparison planet must map to a string. The result follows
/// [`COMPARISON_PLANETS`] order and drops any other keys.
///
/// # Errors
///
/// Returns `UnusableComparison` if the reply is not a JSON object or any
/// expected planet is missing or not a string.
pub fn parse_reply(reply: &str) -> Result<PlanetPrices, UnusableComparison> {
    let raw: HashMap<String, serde_json::Value> = serde_json::from_str(reply)?;
    COMPARISON_PLANETS
        .iter()
        .map(|planet| {
            raw.get(*planet)
                .and_then(serde_json::Value::as_str)
                .map(|price| (*planet, price.to_string()))
                .ok_or(UnusableComparison::MissingPlanet(*planet))
        })
        .collect()
}

/// Deterministic fallback drawing one base price from `rng`.
pub fn fallback_comparison<R: Rng + ?Sized>(item: &str, rng: &mut R) -> PlanetPrices {
    comparison_from_base(estimate_base_price_with(item, rng))
}

/// Deterministic fallback for a known base price: `base × distance` per planet.
#[must_use]
pub fn comparison_from_base(base: u64) -> PlanetPrices {
    COMPARISON_PLANETS
        .iter()
        .map(|planet| {
            let total = base.saturating_mul(distance_multiplier(planet));
            (*planet, Rupees::from_unsigned(total).to_string())
        })
        .collect()
}

/// System prompt for comparison pricing.
pub const SYSTEM_PROMPT: &str = r#"Generate comparison prices for delivering an Earth item to different planets. Start from a realistic base price for the item in Indian Rupees, then apply planet-specific multipliers for distance and difficulty:
- Mars: closest, 100-200x base price
- Venus: harsh environment, 150-300x base price
- Jupiter: far gas giant, 400-600x base price
- Saturn: ring navigation, 300-500x base price
- Neptune: farthest, 700-1000x base price

Format every amount with the rupee sign and Indian digit grouping (₹12,34,567). Respond with a single JSON object:
{
  "Mars": "₹X,XX,XX,XXX",
  "Venus": "₹X,XX,XX,XXX",
  "Jupiter": "₹X,XX,XX,XXX",
  "Saturn": "₹X,XX,XX,XXX",
  "Neptune": "₹X,XX,XX,XXX"
}"#;

/// User prompt for one item.
#[must_use]
pub fn user_prompt(item: &str, base: u64) -> String {
    format!(
        "Generate comparison prices for: {item}\nRealistic base price: {}",
        Rupees::from_unsigned(base)
    )
}
