//! Cosmic Delivery Core - Shared types library.
//!
//! This crate provides common types used across all Cosmic Delivery components:
//! - `storefront` - JSON API serving the catalog, cart, and cosmic pricing
//! - `cli` - Command-line tools for quoting and comparing prices offline
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids and rupee amounts, plus the product
//!   and cart data model

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
