//! Interplanetary pricing engine.
//!
//! Both pricing operations follow the same shape: ask the text generator for
//! a JSON object, validate it, and on any failure answer from a deterministic
//! formula anchored on [`estimator::estimate_base_price`]. Generator failures
//! are logged and absorbed; callers always get a price.

pub mod comparison;
pub mod cosmic;
pub mod destination;
pub mod estimator;
mod virtual_product;

use std::sync::Arc;

use cosmic_delivery_core::PlanetPrices;
use tracing::instrument;

use crate::openai::TextGenerator;

pub use cosmic::CosmicQuote;
pub use destination::{COMPARISON_PLANETS, capitalize, is_sun};
pub use virtual_product::item_emoji;

/// Message returned instead of a price when the destination is the sun.
pub const SUN_MESSAGE: &str = "Congratulations! You're the first to survive selecting the Sun!";

/// Result of a search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The destination was the sun; nothing was priced.
    Sun,
    /// A priced quote.
    Quote(CosmicQuote),
}

/// Pricing front door shared by the HTTP handlers and the CLI.
#[derive(Clone)]
pub struct PricingService {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl std::fmt::Debug for PricingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PricingService")
            .field("generator", &self.generator.is_some())
            .finish()
    }
}

impl PricingService {
    /// Create a service. `None` means every request is priced by formula.
    #[must_use]
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator }
    }

    /// A service that never calls out.
    #[must_use]
    pub fn fallback_only() -> Self {
        Self { generator: None }
    }

    /// Whether a text generator is configured.
    #[must_use]
    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Price a search, short-circuiting on the sun.
    pub async fn search(&self, item: &str, planet: &str, agency: &str) -> SearchOutcome {
        if is_sun(planet) {
            tracing::info!(item, "Sun selected, skipping pricing");
            return SearchOutcome::Sun;
        }
        SearchOutcome::Quote(self.generate_cosmic_price(item, planet, agency).await)
    }

    /// Price delivery of `item` to `planet` via `agency`.
    #[instrument(skip(self))]
    pub async fn generate_cosmic_price(&self, item: &str, planet: &str, agency: &str) -> CosmicQuote {
        let base = estimator::estimate_base_price(item);

        if let Some(generator) = &self.generator {
            let prompt = cosmic::user_prompt(item, planet, agency, base);
            match generator
                .generate_json(cosmic::SYSTEM_PROMPT, &prompt, cosmic::MAX_TOKENS)
                .await
            {
                Ok(reply) => match cosmic::parse_reply(&reply) {
                    Ok(quote) => return quote,
                    Err(e) => tracing::warn!(error = %e, "Unusable cosmic price reply, using fallback"),
                },
                Err(e) => tracing::warn!(error = %e, "Cosmic price generation failed, using fallback"),
            }
        } else {
            tracing::debug!("No text generator configured, using fallback");
        }

        cosmic::cosmic_price_from_base(base, planet, agency)
    }

    /// Price `item` across [`COMPARISON_PLANETS`].
    #[instrument(skip(self))]
    pub async fn generate_comparison(&self, item: &str) -> PlanetPrices {
        let base = estimator::estimate_base_price(item);

        if let Some(generator) = &self.generator {
            let prompt = comparison::user_prompt(item, base);
            match generator
                .generate_json(comparison::SYSTEM_PROMPT, &prompt, comparison::MAX_TOKENS)
                .await
            {
                Ok(reply) => match comparison::parse_reply(&reply) {
                    Ok(prices) => return prices,
                    Err(e) => tracing::warn!(error = %e, "Unusable comparison reply, using fallback"),
                },
                Err(e) => tracing::warn!(error = %e, "Comparison generation failed, using fallback"),
            }
        } else {
            tracing::debug!("No text generator configured, using fallback");
        }

        comparison::comparison_from_base(base)
    }
}
