//! `compare` subcommand.

use cosmic_delivery_core::PlanetPrices;
use cosmic_delivery_storefront::pricing::comparison::fallback_comparison;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use super::PriceSource;

/// Price one item across the comparison planets.
pub async fn prices(source: &PriceSource, item: &str) -> PlanetPrices {
    match source {
        PriceSource::Service(service) => service.generate_comparison(item).await,
        PriceSource::Seeded(seed) => {
            let mut rng = StdRng::seed_from_u64(*seed);
            fallback_comparison(item, &mut rng)
        }
    }
}

/// Run the subcommand and log the result.
pub async fn run(source: &PriceSource, item: &str) {
    let prices = prices(source, item).await;
    info!(item, "Delivery prices by planet");
    for (planet, price) in prices.iter() {
        info!("  {planet}: {price}");
    }
}

#[cfg(test)]
mod tests {
    use cosmic_delivery_storefront::pricing::COMPARISON_PLANETS;
    use cosmic_delivery_storefront::pricing::PricingService;

    use super::*;

    #[tokio::test]
    async fn test_seeded_prices_cover_planets_in_order() {
        let prices = prices(&PriceSource::Seeded(9), "laptop").await;
        let planets: Vec<&str> = prices.labels().collect();
        assert_eq!(planets, COMPARISON_PLANETS);
    }

    #[tokio::test]
    async fn test_offline_service_prices_every_planet() {
        let source = PriceSource::Service(PricingService::fallback_only());
        let prices = prices(&source, "book").await;
        assert_eq!(prices.len(), COMPARISON_PLANETS.len());
    }
}
