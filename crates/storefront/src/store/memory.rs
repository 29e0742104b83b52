//! In-memory cart store.

use std::collections::HashMap;

use cosmic_delivery_core::{CartItem, Product, ProductId, SessionId};
use futures::future::BoxFuture;
use tokio::sync::RwLock;

use super::{CartStore, Result, VirtualProducts};

#[derive(Debug, Default)]
struct SessionCart {
    items: Vec<CartItem>,
    virtual_products: VirtualProducts,
}

impl SessionCart {
    fn is_empty(&self) -> bool {
        self.items.is_empty() && self.virtual_products.is_empty()
    }
}

/// Cart store holding every session in one process-lifetime map.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    sessions: RwLock<HashMap<SessionId, SessionCart>>,
}

impl MemoryCartStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    async fn add(
        &self,
        session: &SessionId,
        product_id: &ProductId,
        virtual_product: Option<Product>,
    ) -> CartItem {
        let mut sessions = self.sessions.write().await;
        let cart = sessions.entry(session.clone()).or_default();

        if let Some(product) = virtual_product {
            cart.virtual_products.insert(product.id.clone(), product);
        }

        if let Some(existing) = cart.items.iter().find(|item| &item.product_id == product_id) {
            return existing.clone();
        }

        let item = CartItem::new(session.clone(), product_id.clone());
        cart.items.push(item.clone());
        item
    }

    async fn remove(&self, session: &SessionId, product_id: &ProductId) {
        let mut sessions = self.sessions.write().await;
        if let Some(cart) = sessions.get_mut(session) {
            cart.items.retain(|item| &item.product_id != product_id);
            cart.virtual_products.remove(product_id);
            if cart.is_empty() {
                sessions.remove(session);
            }
        }
    }
}

impl CartStore for MemoryCartStore {
    fn items<'a>(&'a self, session: &'a SessionId) -> BoxFuture<'a, Result<Vec<CartItem>>> {
        Box::pin(async move {
            let sessions = self.sessions.read().await;
            Ok(sessions
                .get(session)
                .map(|cart| cart.items.clone())
                .unwrap_or_default())
        })
    }

    fn add_item<'a>(
        &'a self,
        session: &'a SessionId,
        product_id: &'a ProductId,
        virtual_product: Option<Product>,
    ) -> BoxFuture<'a, Result<CartItem>> {
        Box::pin(async move { Ok(self.add(session, product_id, virtual_product).await) })
    }

    fn remove_item<'a>(
        &'a self,
        session: &'a SessionId,
        product_id: &'a ProductId,
    ) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            self.remove(session, product_id).await;
            Ok(())
        })
    }

    fn clear<'a>(&'a self, session: &'a SessionId) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            self.sessions.write().await.remove(session);
            Ok(())
        })
    }

    fn virtual_products<'a>(
        &'a self,
        session: &'a SessionId,
    ) -> BoxFuture<'a, Result<VirtualProducts>> {
        Box::pin(async move {
            let sessions = self.sessions.read().await;
            Ok(sessions
                .get(session)
                .map(|cart| cart.virtual_products.clone())
                .unwrap_or_default())
        })
    }

    fn ping(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
mod tests {
    use cosmic_delivery_core::{Exclusivity, PriceLines};

    use super::*;

    fn virtual_product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: "Pizza".to_string(),
            price: "₹3,00,400".to_string(),
            image: "🍕".to_string(),
            description: "Pizza specially prepared for delivery to Mars. Guaranteed cosmic quality!"
                .to_string(),
            planet: "Mars".to_string(),
            breakdown: PriceLines::from_iter([("Base Item Price", "₹400")]),
            is_exclusive: Exclusivity::Standard,
        }
    }

    #[tokio::test]
    async fn test_add_is_idempotent_per_product() {
        let store = MemoryCartStore::new();
        let session = SessionId::new("s1");
        let product = ProductId::new("3");

        let first = store.add_item(&session, &product, None).await.expect("add");
        let second = store.add_item(&session, &product, None).await.expect("add");

        assert_eq!(first, second);
        assert_eq!(store.items(&session).await.expect("items").len(), 1);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = MemoryCartStore::new();
        let product = ProductId::new("1");
        store
            .add_item(&SessionId::new("a"), &product, None)
            .await
            .expect("add");

        assert!(store.items(&SessionId::new("b")).await.expect("items").is_empty());
    }

    #[tokio::test]
    async fn test_items_keep_insertion_order() {
        let store = MemoryCartStore::new();
        let session = SessionId::new("s1");
        for id in ["5", "1", "133"] {
            store
                .add_item(&session, &ProductId::new(id), None)
                .await
                .expect("add");
        }

        let ids: Vec<String> = store
            .items(&session)
            .await
            .expect("items")
            .into_iter()
            .map(|item| item.product_id.into_inner())
            .collect();
        assert_eq!(ids, ["5", "1", "133"]);
    }

    #[tokio::test]
    async fn test_remove_drops_virtual_product() {
        let store = MemoryCartStore::new();
        let session = SessionId::new("s1");
        let product = virtual_product("virtual-1-abc");
        let id = product.id.clone();

        store.add_item(&session, &id, Some(product)).await.expect("add");
        assert!(store.virtual_products(&session).await.expect("table").contains_key(&id));

        store.remove_item(&session, &id).await.expect("remove");
        assert!(store.items(&session).await.expect("items").is_empty());
        assert!(store.virtual_products(&session).await.expect("table").is_empty());

        // Removing again is a no-op
        store.remove_item(&session, &id).await.expect("remove");
    }

    #[tokio::test]
    async fn test_clear_empties_cart_and_virtual_table() {
        let store = MemoryCartStore::new();
        let session = SessionId::new("s1");
        let product = virtual_product("virtual-2-def");
        let id = product.id.clone();

        store.add_item(&session, &id, Some(product)).await.expect("add");
        store.add_item(&session, &ProductId::new("2"), None).await.expect("add");

        store.clear(&session).await.expect("clear");
        assert!(store.items(&session).await.expect("items").is_empty());
        assert!(store.virtual_products(&session).await.expect("table").is_empty());

        // Clearing an empty cart succeeds
        store.clear(&session).await.expect("clear");
    }
}
