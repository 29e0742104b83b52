//! Read-only product catalog.
//!
//! Seeded once at startup and never mutated. Virtual products minted by
//! searches never enter the catalog; they live in each session's cart store.

mod seed;

use cosmic_delivery_core::Product;

/// The fixed catalog, in declaration order.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an explicit product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The standard seed catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::seed_products())
    }

    /// Standard (non-exclusive) products.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| !p.is_exclusive())
    }

    /// Planet-exclusive products.
    pub fn exclusive_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_exclusive())
    }

    /// Look up a catalog product by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Total number of products, both kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use cosmic_delivery_core::Rupees;

    use super::*;

    #[test]
    fn test_standard_products_in_declaration_order() {
        let catalog = Catalog::seeded();
        let ids: Vec<&str> = catalog.products().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_exclusive_products_in_declaration_order() {
        let catalog = Catalog::seeded();
        let exclusives: Vec<&Product> = catalog.exclusive_products().collect();
        assert_eq!(exclusives.len(), 17);
        assert_eq!(exclusives.first().map(|p| p.id.as_str()), Some("101"));
        assert_eq!(exclusives.last().map(|p| p.id.as_str()), Some("137"));
        assert!(exclusives.iter().all(|p| p.is_exclusive()));
    }

    #[test]
    fn test_get_product() {
        let catalog = Catalog::seeded();
        let pizza = catalog.get("3").expect("pizza");
        assert_eq!(pizza.name, "Margherita Pizza");
        assert_eq!(pizza.planet, "Venus");
        assert!(catalog.get("999").is_none());
        assert!(catalog.get("").is_none());
    }

    #[test]
    fn test_seed_invariants() {
        let catalog = Catalog::seeded();
        let mut ids = HashSet::new();
        for product in catalog.products().chain(catalog.exclusive_products()) {
            assert!(ids.insert(product.id.as_str()), "duplicate id {}", product.id);
            assert!(!product.breakdown.is_empty(), "{} has no breakdown", product.id);
            assert!(product.price.parse::<Rupees>().is_ok(), "{} price", product.id);
            for (label, value) in product.breakdown.iter() {
                assert!(value.parse::<Rupees>().is_ok(), "{}: {label}", product.id);
            }
        }
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_space_station_exclusives_carry_discount_lines() {
        let catalog = Catalog::seeded();
        let mug = catalog.get("133").expect("mug");
        let discount: Rupees = mug
            .breakdown
            .get("Space Station Discount")
            .expect("discount line")
            .parse()
            .expect("rupees");
        assert!(discount.amount() < 0);
    }
}
