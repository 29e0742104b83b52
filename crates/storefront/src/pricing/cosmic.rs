//! Single-destination cosmic pricing: prompt, reply validation, and the
//! deterministic fallback formula.

use cosmic_delivery_core::{Breakdown, Rupees};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::destination::{
    SPACE_STATION, SPACE_STATION_DISCOUNT_TENTHS, agency_multiplier_tenths, distance_multiplier,
    is_space_station,
};
use super::estimator::estimate_base_price_with;

/// Token cap for cosmic price replies.
pub const MAX_TOKENS: u32 = 500;

/// Label of the discount line appended for the space station.
pub const DISCOUNT_LABEL: &str = "Space Station Discount";

/// A themed total price and its itemized breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosmicQuote {
    /// Formatted total, e.g. `₹3,00,400`.
    pub price: String,
    pub breakdown: Breakdown,
}

/// Why a generator reply could not be used.
#[derive(Debug, Error)]
pub enum UnusableReply {
    #[error("reply is not a JSON object of strings: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("reply has no price")]
    MissingPrice,
    #[error("reply has no breakdown")]
    MissingBreakdown,
    #[error("reply breakdown is empty")]
    EmptyBreakdown,
}

#[derive(Deserialize)]
struct RawQuote {
    #[serde(default)]
    price: Option<String>,
    #[serde(default)]
    breakdown: Option<Breakdown>,
}

/// Validate a generator reply. Breakdown order is kept as written.
///
/// # Errors
///
/// Returns `UnusableReply` if the reply is not JSON, either field is missing
/// or null, the breakdown is empty, or any value is not a string.
pub fn parse_reply(reply: &str) -> Result<CosmicQuote, UnusableReply> {
    let raw: RawQuote = serde_json::from_str(reply)?;
    let price = raw.price.ok_or(UnusableReply::MissingPrice)?;
    let breakdown = raw.breakdown.ok_or(UnusableReply::MissingBreakdown)?;
    if breakdown.is_empty() {
        return Err(UnusableReply::EmptyBreakdown);
    }
    Ok(CosmicQuote { price, breakdown })
}

/// Deterministic fallback drawing the base price from `rng`.
pub fn fallback_cosmic_price<R: Rng + ?Sized>(
    item: &str,
    planet: &str,
    agency: &str,
    rng: &mut R,
) -> CosmicQuote {
    cosmic_price_from_base(estimate_base_price_with(item, rng), planet, agency)
}

/// Deterministic fallback for a known base price.
#[must_use]
pub fn cosmic_price_from_base(base: u64, planet: &str, agency: &str) -> CosmicQuote {
    let shipping = tenths_of(
        base.saturating_mul(distance_multiplier(planet)),
        agency_multiplier_tenths(agency),
    );
    let insurance = tenths_of(shipping, 6);
    let bureaucracy = tenths_of(shipping, 4);
    let maintenance = tenths_of(shipping, 3);
    let taxes = tenths_of(shipping, 2);

    let mut total = base
        .saturating_add(shipping)
        .saturating_add(insurance)
        .saturating_add(bureaucracy)
        .saturating_add(maintenance)
        .saturating_add(taxes);

    let mut breakdown = Breakdown::new();
    breakdown.insert("Base Item Price", rupees(base));
    breakdown.insert("Interplanetary Shipping", rupees(shipping));
    breakdown.insert("Space Bureaucracy Fee", rupees(bureaucracy));
    breakdown.insert("Cosmic Insurance", rupees(insurance));
    breakdown.insert("Rocket Maintenance", rupees(maintenance));
    breakdown.insert("Alien Import Taxes", rupees(taxes));

    if is_space_station(planet) {
        let discount = tenths_of(total, SPACE_STATION_DISCOUNT_TENTHS);
        total -= discount;
        breakdown.insert(
            DISCOUNT_LABEL,
            Rupees::from_unsigned(discount).negated().to_string(),
        );
    }

    CosmicQuote {
        price: rupees(total),
        breakdown,
    }
}

/// `floor(value * tenths / 10)`.
const fn tenths_of(value: u64, tenths: u64) -> u64 {
    value.saturating_mul(tenths) / 10
}

fn rupees(amount: u64) -> String {
    Rupees::from_unsigned(amount).to_string()
}

/// System prompt for cosmic pricing.
pub const SYSTEM_PROMPT: &str = r#"You are a humorous pricing specialist for "Cosmic Delivery", a service that ships Earth items to other planets. Keep the base price of the item realistic and in Indian Rupees. Make every other line item a funny, exaggerated interplanetary fee such as "Space Bureaucracy Fee", "Alien Customs Bribe" or "Meteor Dodge Insurance". Distance raises shipping costs and the agency tier raises premiums. The total should land between 100 and 1000 times the base price.

Format every amount with the rupee sign and Indian digit grouping (₹12,34,567). Respond with a single JSON object:
{
  "price": "₹X,XX,XX,XXX",
  "breakdown": {
    "Base Item Price": "₹...",
    "<fee name>": "₹..."
  }
}"#;

/// User prompt anchoring the reply to the estimated base price.
#[must_use]
pub fn user_prompt(item: &str, planet: &str, agency: &str, base: u64) -> String {
    let mut prompt = format!(
        "Generate cosmic pricing for delivering \"{item}\" to {planet} via {agency} delivery.\n\
         Realistic base price: {base}\n\
         Planet distance multiplier: {distance}x",
        base = rupees(base),
        distance = distance_multiplier(planet),
    );
    if is_space_station(planet) {
        prompt.push_str(&format!(
            "\nSPECIAL: {SPACE_STATION} residents get a discount. Add a \"{DISCOUNT_LABEL}\" line with a negative amount (-₹XX,XXX) and lower the total accordingly."
        ));
    }
    prompt
}
