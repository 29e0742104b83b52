//! `quote` subcommand.

use cosmic_delivery_storefront::pricing::cosmic::fallback_cosmic_price;
use cosmic_delivery_storefront::pricing::{SUN_MESSAGE, SearchOutcome, capitalize, is_sun};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use super::PriceSource;

/// Price one item for one destination.
pub async fn price(source: &PriceSource, item: &str, planet: &str, agency: &str) -> SearchOutcome {
    match source {
        PriceSource::Service(service) => service.search(item, planet, agency).await,
        PriceSource::Seeded(_) if is_sun(planet) => SearchOutcome::Sun,
        PriceSource::Seeded(seed) => {
            let mut rng = StdRng::seed_from_u64(*seed);
            SearchOutcome::Quote(fallback_cosmic_price(item, planet, agency, &mut rng))
        }
    }
}

/// Run the subcommand and log the result.
pub async fn run(source: &PriceSource, item: &str, planet: &str, agency: &str) {
    match price(source, item, planet, agency).await {
        SearchOutcome::Sun => info!("{SUN_MESSAGE}"),
        SearchOutcome::Quote(quote) => {
            info!(
                item,
                planet = %capitalize(planet),
                agency = %capitalize(agency),
                "Total: {}",
                quote.price
            );
            for (label, value) in quote.breakdown.iter() {
                info!("  {label}: {value}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use cosmic_delivery_storefront::pricing::cosmic::DISCOUNT_LABEL;

    use super::*;

    #[tokio::test]
    async fn test_same_seed_same_quote() {
        let source = PriceSource::Seeded(42);
        let first = price(&source, "pizza", "Mars", "express").await;
        let second = price(&source, "pizza", "Mars", "express").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_seeded_sun_short_circuits() {
        let outcome = price(&PriceSource::Seeded(1), "pizza", "  SUN ", "express").await;
        assert_eq!(outcome, SearchOutcome::Sun);
    }

    #[tokio::test]
    async fn test_seeded_space_station_has_discount() {
        let outcome = price(&PriceSource::Seeded(3), "coffee", "space station", "budget").await;
        let SearchOutcome::Quote(quote) = outcome else {
            panic!("expected a quote");
        };
        assert_eq!(quote.breakdown.len(), 7);
        assert!(quote.breakdown.contains(DISCOUNT_LABEL));
    }
}
