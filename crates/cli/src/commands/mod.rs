//! Subcommand implementations.

pub mod catalog;
pub mod compare;
pub mod quote;

use std::sync::Arc;

use cosmic_delivery_storefront::config::{ConfigError, GenerationConfig};
use cosmic_delivery_storefront::openai::{GenerationError, OpenAiClient, TextGenerator};
use cosmic_delivery_storefront::pricing::PricingService;
use thiserror::Error;

/// Errors setting up a price source.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("text generation client: {0}")]
    Generation(#[from] GenerationError),
}

/// Where prices come from.
#[derive(Debug)]
pub enum PriceSource {
    /// The pricing service: generator when configured, formula otherwise.
    Service(PricingService),
    /// The formula with a seeded base price.
    Seeded(u64),
}

impl PriceSource {
    /// Pick a source from the command-line flags and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if generation settings are present but invalid.
    pub fn select(seed: Option<u64>, offline: bool) -> Result<Self, SetupError> {
        if let Some(seed) = seed {
            return Ok(Self::Seeded(seed));
        }
        if offline {
            return Ok(Self::Service(PricingService::fallback_only()));
        }

        let service = match GenerationConfig::from_env()? {
            Some(config) => {
                let client = OpenAiClient::new(&config)?;
                tracing::info!(model = client.model(), "Using text generation");
                PricingService::new(Some(Arc::new(client) as Arc<dyn TextGenerator>))
            }
            None => {
                tracing::warn!("OPENAI_API_KEY not set, using fallback formulas");
                PricingService::fallback_only()
            }
        };
        Ok(Self::Service(service))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_wins_over_environment() {
        let source = PriceSource::select(Some(7), false).expect("select");
        assert!(matches!(source, PriceSource::Seeded(7)));
    }

    #[test]
    fn test_offline_never_builds_a_generator() {
        let source = PriceSource::select(None, true).expect("select");
        match source {
            PriceSource::Service(service) => assert!(!service.has_generator()),
            PriceSource::Seeded(_) => panic!("expected service"),
        }
    }
}
