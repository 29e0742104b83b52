//! Cart data model.
//!
//! A cart is not an entity of its own: it is the set of [`CartItem`]s that
//! share a session id. There is no quantity field, so a product appears at
//! most once per session.

use serde::{Deserialize, Serialize};

use super::id::{CartItemId, ProductId, SessionId};
use super::product::Product;

/// A product reference held in a session's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub product_id: ProductId,
    pub session_id: SessionId,
}

impl CartItem {
    /// Create a cart item with a freshly generated id.
    #[must_use]
    pub fn new(session_id: SessionId, product_id: ProductId) -> Self {
        Self {
            id: CartItemId::generate(),
            product_id,
            session_id,
        }
    }
}

/// A cart item together with the product it resolved to.
///
/// Serializes flat: the cart item fields plus a `product` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    #[serde(flatten)]
    pub item: CartItem,
    pub product: Product,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::product::{Exclusivity, PriceLines};

    #[test]
    fn test_cart_item_serializes_camel_case() {
        let item = CartItem::new(SessionId::new("session-1"), ProductId::new("3"));
        let json = serde_json::to_value(&item).expect("serialize");
        assert_eq!(json["productId"], "3");
        assert_eq!(json["sessionId"], "session-1");
        assert!(json["id"].is_string());
    }

    #[test]
    fn test_cart_entry_is_flat() {
        let item = CartItem::new(SessionId::new("s"), ProductId::new("1"));
        let entry = CartEntry {
            item,
            product: Product {
                id: ProductId::new("1"),
                name: "Premium Coffee Beans".to_string(),
                price: "₹2,47,50,000".to_string(),
                image: "☕".to_string(),
                description: String::new(),
                planet: "Mars".to_string(),
                breakdown: PriceLines::from_iter([("Base Price", "₹500")]),
                is_exclusive: Exclusivity::Standard,
            },
        };

        let json = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(json["productId"], "1");
        assert_eq!(json["product"]["name"], "Premium Coffee Beans");
    }
}
