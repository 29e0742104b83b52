//! Business logic services for storefront.
//!
//! - `cart` - Session cart operations with product resolution

pub mod cart;

pub use cart::{CartError, CartService};
