//! Session-scoped cart storage.
//!
//! A cart is the list of [`CartItem`]s sharing a session id, plus a side
//! table of virtual products those items may point at. Two backends
//! implement [`CartStore`]:
//!
//! - [`MemoryCartStore`]: one map behind an async `RwLock`, gone on restart
//! - [`LocalCartStore`]: keyed JSON documents in a local directory

mod local;
mod memory;

use std::collections::BTreeMap;
use std::sync::Arc;

use cosmic_delivery_core::{CartItem, Product, ProductId, SessionId};
use futures::future::BoxFuture;
use thiserror::Error;

use crate::config::CartBackendConfig;

pub use local::LocalCartStore;
pub use memory::MemoryCartStore;

/// Storage key prefix for a session's cart item list.
pub const CART_KEY_PREFIX: &str = "cosmic-delivery-cart-";

/// Storage key prefix for a session's virtual product table.
pub const VIRTUAL_PRODUCTS_KEY_PREFIX: &str = "cosmic-delivery-virtual-products-";

/// Virtual products registered for one session, keyed by id.
pub type VirtualProducts = BTreeMap<ProductId, Product>;

/// Errors from a cart storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing store failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored document could not be encoded or decoded.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Session-partitioned cart storage.
///
/// Implementations must keep at most one item per (session, product id) and
/// preserve insertion order.
pub trait CartStore: Send + Sync {
    /// Items in a session's cart, oldest first.
    fn items<'a>(&'a self, session: &'a SessionId) -> BoxFuture<'a, Result<Vec<CartItem>>>;

    /// Add a product to a session's cart.
    ///
    /// If `virtual_product` is given it is registered in the session's side
    /// table first. When the product is already in the cart the existing
    /// item is returned unchanged.
    fn add_item<'a>(
        &'a self,
        session: &'a SessionId,
        product_id: &'a ProductId,
        virtual_product: Option<Product>,
    ) -> BoxFuture<'a, Result<CartItem>>;

    /// Remove a product from a session's cart, dropping its virtual product.
    /// Removing an absent product succeeds.
    fn remove_item<'a>(
        &'a self,
        session: &'a SessionId,
        product_id: &'a ProductId,
    ) -> BoxFuture<'a, Result<()>>;

    /// Remove every item and virtual product for a session.
    fn clear<'a>(&'a self, session: &'a SessionId) -> BoxFuture<'a, Result<()>>;

    /// A session's virtual product table.
    fn virtual_products<'a>(&'a self, session: &'a SessionId)
    -> BoxFuture<'a, Result<VirtualProducts>>;

    /// Check the backend is usable.
    fn ping(&self) -> BoxFuture<'_, Result<()>>;
}

/// Storage key for a session's cart items.
#[must_use]
pub fn cart_key(session: &SessionId) -> String {
    format!("{CART_KEY_PREFIX}{session}")
}

/// Storage key for a session's virtual products.
#[must_use]
pub fn virtual_products_key(session: &SessionId) -> String {
    format!("{VIRTUAL_PRODUCTS_KEY_PREFIX}{session}")
}

/// Build the backend selected in configuration.
#[must_use]
pub fn from_config(backend: &CartBackendConfig) -> Arc<dyn CartStore> {
    match backend {
        CartBackendConfig::Memory => Arc::new(MemoryCartStore::new()),
        CartBackendConfig::Local { dir } => Arc::new(LocalCartStore::new(dir.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys_are_namespaced() {
        let session = SessionId::new("session-1-abc");
        assert_eq!(cart_key(&session), "cosmic-delivery-cart-session-1-abc");
        assert_eq!(
            virtual_products_key(&session),
            "cosmic-delivery-virtual-products-session-1-abc"
        );
    }
}
