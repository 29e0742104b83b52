//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

use chrono::Utc;
use uuid::Uuid;

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `Into<String>` implementations
/// - `Borrow<str>` so maps keyed by the ID can be queried with a `&str`
///
/// # Example
///
/// ```rust
/// # use cosmic_delivery_core::define_id;
/// define_id!(OrderId);
/// define_id!(ShipmentId);
///
/// let order_id = OrderId::new("42");
/// let shipment_id = ShipmentId::new("42");
///
/// // These are different types, so this won't compile:
/// // let _: OrderId = shipment_id;
/// assert_eq!(order_id.as_str(), shipment_id.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the underlying string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::core::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::core::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(CartItemId);
define_id!(SessionId);

/// Prefix carried by every product id minted from a search or compare result.
pub const VIRTUAL_PRODUCT_PREFIX: &str = "virtual-";

impl ProductId {
    /// Mint an id for a virtual product (`virtual-<unix-millis>-<uuid>`).
    #[must_use]
    pub fn generate_virtual() -> Self {
        Self(format!(
            "{VIRTUAL_PRODUCT_PREFIX}{}-{}",
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple()
        ))
    }

    /// Whether this id was minted by [`ProductId::generate_virtual`].
    #[must_use]
    pub fn is_virtual(&self) -> bool {
        self.0.starts_with(VIRTUAL_PRODUCT_PREFIX)
    }
}

impl CartItemId {
    /// Generate a random cart item id (UUID v4).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl SessionId {
    /// Generate an opaque session token from the current time and randomness.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!(
            "session-{}-{}",
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple()
        ))
    }

    /// Whether the token is blank (empty or whitespace only).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_id_serializes_transparently() {
        let id = ProductId::new("101");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"101\"");

        let back: ProductId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_borrows_as_str_for_map_lookup() {
        let mut map = HashMap::new();
        map.insert(ProductId::new("7"), "seven");
        assert_eq!(map.get("7"), Some(&"seven"));
    }

    #[test]
    fn test_generated_session_ids_are_unique() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("session-"));
        assert!(!a.is_blank());
    }

    #[test]
    fn test_virtual_product_ids() {
        let id = ProductId::generate_virtual();
        assert!(id.is_virtual());
        assert!(!ProductId::new("101").is_virtual());
    }

    #[test]
    fn test_blank_session() {
        assert!(SessionId::new("   ").is_blank());
        assert!(SessionId::new("").is_blank());
    }
}
