//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::openai::{GenerationError, OpenAiClient, TextGenerator};
use crate::pricing::PricingService;
use crate::services::CartService;
use crate::store::{self, CartStore};

/// Error building application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("text generation client: {0}")]
    Generation(#[from] GenerationError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog, the cart service, and the pricing engine.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    catalog: Arc<Catalog>,
    cart: CartService,
    pricing: PricingService,
}

impl AppState {
    /// Create application state from configuration.
    ///
    /// Seeds the catalog, opens the configured cart backend, and builds the
    /// text-generation client when an API key is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the text-generation client cannot be built.
    pub fn new(config: &StorefrontConfig) -> Result<Self, StateError> {
        let store = store::from_config(&config.cart_backend);

        let generator = match &config.generation {
            Some(generation) => {
                let client = OpenAiClient::new(generation)?;
                tracing::info!(model = client.model(), "Text generation enabled");
                Some(Arc::new(client) as Arc<dyn TextGenerator>)
            }
            None => {
                tracing::warn!("OPENAI_API_KEY not set, pricing will use fallback formulas only");
                None
            }
        };

        Ok(Self::from_parts(
            Catalog::seeded(),
            store,
            PricingService::new(generator),
        ))
    }

    /// Assemble state from already-built parts.
    #[must_use]
    pub fn from_parts(
        catalog: Catalog,
        store: Arc<dyn CartStore>,
        pricing: PricingService,
    ) -> Self {
        let catalog = Arc::new(catalog);
        let cart = CartService::new(Arc::clone(&catalog), store);

        Self {
            inner: Arc::new(AppStateInner {
                catalog,
                cart,
                pricing,
            }),
        }
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the cart service.
    #[must_use]
    pub fn cart(&self) -> &CartService {
        &self.inner.cart
    }

    /// Get a reference to the pricing engine.
    #[must_use]
    pub fn pricing(&self) -> &PricingService {
        &self.inner.pricing
    }
}
