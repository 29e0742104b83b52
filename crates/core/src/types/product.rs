//! Product data model.
//!
//! Prices on a [`Product`] are display strings, not numbers: the catalog is
//! satirical and its figures are reproduced exactly as written, including
//! breakdown lines that do not add up to the headline price.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use super::id::ProductId;

/// A product in the catalog, or a virtual product minted from a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Formatted total, e.g. `₹12,34,567`.
    pub price: String,
    /// Emoji glyph or image URL.
    pub image: String,
    pub description: String,
    /// Destination label. Free text so new destinations need no schema change.
    pub planet: String,
    pub breakdown: Breakdown,
    #[serde(default)]
    pub is_exclusive: Exclusivity,
}

impl Product {
    /// Whether the product is a planet exclusive.
    #[must_use]
    pub fn is_exclusive(&self) -> bool {
        self.is_exclusive == Exclusivity::Exclusive
    }
}

/// Which half of the catalog a product belongs to.
///
/// Serialized as the integer `0` (standard) or `1` (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Exclusivity {
    /// Standard Earth-sourced item.
    #[default]
    Standard,
    /// Only available at a specific destination.
    Exclusive,
}

/// An `isExclusive` value other than 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("isExclusive must be 0 or 1, got {0}")]
pub struct ExclusivityError(u8);

impl From<Exclusivity> for u8 {
    fn from(value: Exclusivity) -> Self {
        match value {
            Exclusivity::Standard => 0,
            Exclusivity::Exclusive => 1,
        }
    }
}

impl TryFrom<u8> for Exclusivity {
    type Error = ExclusivityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Standard),
            1 => Ok(Self::Exclusive),
            other => Err(ExclusivityError(other)),
        }
    }
}

/// Ordered mapping from a label to a formatted price.
///
/// Insertion order is display order and survives a JSON round trip.
/// Inserting an existing label replaces its value in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriceLines(Vec<(String, String)>);

/// Fee label to formatted amount, in display order.
pub type Breakdown = PriceLines;

/// Destination to formatted price, in display order.
pub type PlanetPrices = PriceLines;

impl PriceLines {
    /// Create an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert or replace a line.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        if let Some(slot) = self.0.iter_mut().find(|(existing, _)| *existing == label) {
            slot.1 = value;
        } else {
            self.0.push((label, value));
        }
    }

    /// Look up a line by label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, value)| value.as_str())
    }

    /// Whether a label is present.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(label, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(label, value)| (label.as_str(), value.as_str()))
    }

    /// Labels in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(label, _)| label.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PriceLines {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut lines = Self::new();
        for (label, value) in iter {
            lines.insert(label, value);
        }
        lines
    }
}

impl IntoIterator for PriceLines {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for PriceLines {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in &self.0 {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PriceLines {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LinesVisitor;

        impl<'de> Visitor<'de> for LinesVisitor {
            type Value = PriceLines;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of label to formatted price strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut lines = PriceLines::new();
                while let Some((label, value)) = access.next_entry::<String, String>()? {
                    lines.insert(label, value);
                }
                Ok(lines)
            }
        }

        deserializer.deserialize_map(LinesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: ProductId::new("133"),
            name: "Zero Gravity Coffee Mug".to_string(),
            price: "₹12,345".to_string(),
            image: "☕".to_string(),
            description: "Coffee mug designed for zero gravity.".to_string(),
            planet: "Space Station".to_string(),
            breakdown: [
                ("Anti-Gravity Design", "₹8,000"),
                ("Space Station Discount", "-₹3,000"),
                ("Magnetic Base", "₹6,345"),
            ]
            .into_iter()
            .collect(),
            is_exclusive: Exclusivity::Exclusive,
        }
    }

    #[test]
    fn test_product_serializes_camel_case_with_integer_flag() {
        let json = serde_json::to_value(sample_product()).expect("serialize");
        assert_eq!(json["isExclusive"], 1);
        assert_eq!(json["planet"], "Space Station");
        assert!(json.get("is_exclusive").is_none());
    }

    #[test]
    fn test_breakdown_preserves_order_through_json() {
        let product = sample_product();
        let json = serde_json::to_string(&product).expect("serialize");
        let back: Product = serde_json::from_str(&json).expect("deserialize");

        let labels: Vec<&str> = back.breakdown.labels().collect();
        assert_eq!(
            labels,
            ["Anti-Gravity Design", "Space Station Discount", "Magnetic Base"]
        );
        assert_eq!(back, product);
    }

    #[test]
    fn test_breakdown_deserializes_in_document_order() {
        let lines: PriceLines =
            serde_json::from_str(r#"{"Zeta": "₹1", "Alpha": "₹2", "Mid": "₹3"}"#)
                .expect("deserialize");
        let labels: Vec<&str> = lines.labels().collect();
        assert_eq!(labels, ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_breakdown_rejects_non_string_values() {
        let result = serde_json::from_str::<PriceLines>(r#"{"Base": 500}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut lines = PriceLines::new();
        lines.insert("A", "₹1");
        lines.insert("B", "₹2");
        lines.insert("A", "₹3");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines.get("A"), Some("₹3"));
        assert_eq!(lines.labels().next(), Some("A"));
    }

    #[test]
    fn test_exclusivity_rejects_other_integers() {
        assert!(serde_json::from_str::<Exclusivity>("2").is_err());
        assert_eq!(
            serde_json::from_str::<Exclusivity>("0").expect("deserialize"),
            Exclusivity::Standard
        );
    }

    #[test]
    fn test_missing_exclusive_flag_defaults_to_standard() {
        let json = r#"{
            "id": "virtual-1",
            "name": "Pizza",
            "price": "₹1,000",
            "image": "🍕",
            "description": "Hot",
            "planet": "Mars",
            "breakdown": {"Base Item Price": "₹400"}
        }"#;
        let product: Product = serde_json::from_str(json).expect("deserialize");
        assert!(!product.is_exclusive());
    }
}
