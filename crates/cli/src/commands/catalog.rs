//! `catalog` subcommand.

use cosmic_delivery_storefront::catalog::Catalog;
use tracing::info;

/// Log the seeded catalog, one product per line.
pub fn list(exclusive: bool) {
    let catalog = Catalog::seeded();
    let products: Vec<_> = if exclusive {
        catalog.exclusive_products().collect()
    } else {
        catalog.products().collect()
    };

    info!(count = products.len(), exclusive, "Catalog");
    for product in products {
        info!(
            "  [{}] {} {} ({}) {}",
            product.id, product.image, product.name, product.planet, product.price
        );
    }
}
