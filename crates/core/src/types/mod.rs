//! Core types for Cosmic Delivery.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod price;
pub mod product;

pub use cart::{CartEntry, CartItem};
pub use id::*;
pub use price::{PriceParseError, RUPEE_SIGN, Rupees};
pub use product::{Breakdown, Exclusivity, ExclusivityError, PlanetPrices, PriceLines, Product};
