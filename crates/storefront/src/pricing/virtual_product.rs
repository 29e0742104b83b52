//! Products minted from a search quote so they can go in a cart.

use cosmic_delivery_core::{Exclusivity, Product, ProductId};

use super::cosmic::CosmicQuote;

/// Keyword to glyph, checked in order.
const ITEM_EMOJI: &[(&[&str], &str)] = &[
    (&["coffee"], "☕"),
    (&["pizza"], "🍕"),
    (&["laptop", "computer"], "💻"),
    (&["phone"], "📱"),
    (&["car"], "🚗"),
    (&["book"], "📚"),
    (&["watch"], "⌚"),
    (&["shoes"], "👟"),
    (&["tv", "television"], "📺"),
    (&["game"], "🎮"),
    (&["music"], "🎵"),
    (&["camera"], "📷"),
    (&["food"], "🍽️"),
    (&["drink"], "🥤"),
];

const DEFAULT_EMOJI: &str = "📦";

/// Glyph shown for a free-text item.
#[must_use]
pub fn item_emoji(item: &str) -> &'static str {
    let lower = item.to_lowercase();
    ITEM_EMOJI
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map_or(DEFAULT_EMOJI, |(_, emoji)| *emoji)
}

impl CosmicQuote {
    /// Wrap the quote in a standard, non-exclusive product with a fresh
    /// `virtual-` id.
    #[must_use]
    pub fn to_virtual_product(&self, item: &str, planet: &str) -> Product {
        Product {
            id: ProductId::generate_virtual(),
            name: item.to_string(),
            price: self.price.clone(),
            image: item_emoji(item).to_string(),
            description: format!(
                "{item} specially prepared for delivery to {planet}. Guaranteed cosmic quality!"
            ),
            planet: planet.to_string(),
            breakdown: self.breakdown.clone(),
            is_exclusive: Exclusivity::Standard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::cosmic::cosmic_price_from_base;

    #[test]
    fn test_item_emoji() {
        assert_eq!(item_emoji("Cold Coffee"), "☕");
        assert_eq!(item_emoji("iPhone 15"), "📱");
        assert_eq!(item_emoji("Smart TV"), "📺");
        assert_eq!(item_emoji("Board Game"), "🎮");
        assert_eq!(item_emoji("rubber duck"), "📦");
        // "scarf" contains "car"
        assert_eq!(item_emoji("Scarf"), "🚗");
    }

    #[test]
    fn test_virtual_product_from_quote() {
        let quote = cosmic_price_from_base(400, "Mars", "express");
        let product = quote.to_virtual_product("Pizza", "Mars");

        assert!(product.id.is_virtual());
        assert_eq!(product.name, "Pizza");
        assert_eq!(product.image, "🍕");
        assert_eq!(product.price, quote.price);
        assert_eq!(product.breakdown, quote.breakdown);
        assert_eq!(
            product.description,
            "Pizza specially prepared for delivery to Mars. Guaranteed cosmic quality!"
        );
        assert!(!product.is_exclusive());
    }

    #[test]
    fn test_virtual_ids_are_unique() {
        let quote = cosmic_price_from_base(100, "Venus", "budget");
        let a = quote.to_virtual_product("Tea", "Venus");
        let b = quote.to_virtual_product("Tea", "Venus");
        assert_ne!(a.id, b.id);
    }
}
