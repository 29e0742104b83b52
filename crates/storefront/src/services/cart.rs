//! Cart operations over the catalog and a cart store.
//!
//! Product resolution is one capability: by id, check the catalog first,
//! then the session's virtual product table.

use std::sync::Arc;

use cosmic_delivery_core::{CartEntry, CartItem, Product, ProductId, SessionId};
use thiserror::Error;
use tracing::instrument;

use crate::catalog::Catalog;
use crate::store::{CartStore, StorageError, VirtualProducts};

/// Errors from cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The supplied product does not match the product id being added.
    #[error("product payload id {found} does not match {expected}")]
    ProductMismatch {
        /// Product id from the request.
        expected: ProductId,
        /// Id carried by the product payload.
        found: ProductId,
    },

    /// The cart store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Session cart operations.
#[derive(Clone)]
pub struct CartService {
    catalog: Arc<Catalog>,
    store: Arc<dyn CartStore>,
}

impl CartService {
    /// Create a cart service.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, store: Arc<dyn CartStore>) -> Self {
        Self { catalog, store }
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn CartStore> {
        &self.store
    }

    /// Resolve a product id for a session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the virtual product table cannot be read.
    pub async fn resolve_product(
        &self,
        session: &SessionId,
        product_id: &ProductId,
    ) -> Result<Option<Product>, StorageError> {
        if let Some(product) = self.catalog.get(product_id.as_str()) {
            return Ok(Some(product.clone()));
        }
        let table = self.store.virtual_products(session).await?;
        Ok(self.resolve_in(&table, product_id))
    }

    /// Resolve against the catalog, then an already loaded virtual table.
    fn resolve_in(&self, table: &VirtualProducts, product_id: &ProductId) -> Option<Product> {
        self.catalog
            .get(product_id.as_str())
            .or_else(|| table.get(product_id))
            .cloned()
    }

    /// Add a product to a session's cart.
    ///
    /// A supplied product is registered as a virtual product unless its id is
    /// already in the catalog. Adding a product twice returns the first item.
    ///
    /// # Errors
    ///
    /// Returns `CartError::ProductMismatch` if the payload id differs from
    /// `product_id`, or `CartError::Storage` if the store fails.
    #[instrument(skip(self, product), fields(session = %session, product_id = %product_id))]
    pub async fn add_to_cart(
        &self,
        session: &SessionId,
        product_id: &ProductId,
        product: Option<Product>,
    ) -> Result<CartItem, CartError> {
        if let Some(payload) = &product
            && &payload.id != product_id
        {
            return Err(CartError::ProductMismatch {
                expected: product_id.clone(),
                found: payload.id.clone(),
            });
        }

        let virtual_product = product.filter(|p| self.catalog.get(p.id.as_str()).is_none());
        let item = self
            .store
            .add_item(session, product_id, virtual_product)
            .await?;
        tracing::info!(cart_item_id = %item.id, "Added to cart");
        Ok(item)
    }

    /// Remove a product from a session's cart. Absent products are ignored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails.
    #[instrument(skip(self), fields(session = %session, product_id = %product_id))]
    pub async fn remove_from_cart(
        &self,
        session: &SessionId,
        product_id: &ProductId,
    ) -> Result<(), StorageError> {
        self.store.remove_item(session, product_id).await
    }

    /// Empty a session's cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails.
    #[instrument(skip(self), fields(session = %session))]
    pub async fn clear_cart(&self, session: &SessionId) -> Result<(), StorageError> {
        self.store.clear(session).await
    }

    /// A session's cart with products resolved, oldest first.
    ///
    /// Items whose product cannot be resolved are left out.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails.
    #[instrument(skip(self), fields(session = %session))]
    pub async fn list_cart(&self, session: &SessionId) -> Result<Vec<CartEntry>, StorageError> {
        let items = self.store.items(session).await?;
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let virtual_products = self.store.virtual_products(session).await?;
        let entries = items
            .into_iter()
            .filter_map(|item| {
                let product = self.resolve_in(&virtual_products, &item.product_id);
                if product.is_none() {
                    tracing::debug!(product_id = %item.product_id, "Dropping unresolvable cart item");
                }
                product.map(|product| CartEntry { item, product })
            })
            .collect();
        Ok(entries)
    }
}
