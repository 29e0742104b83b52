//! Realistic base prices for free-text item names.
//!
//! The estimate anchors both the fallback formulas and the prompts sent to
//! the text generator, so a "pizza" never starts at laptop prices.

use std::ops::Range;

use rand::Rng;

/// A keyword category and its base price range in rupees.
struct Category {
    keywords: &'static [&'static str],
    range: Range<u64>,
}

/// Checked in order; the first category with a matching keyword wins.
const CATEGORIES: &[Category] = &[
    Category {
        keywords: &["laptop", "computer", "gaming"],
        range: 100_000..300_000,
    },
    Category {
        keywords: &["phone", "smartphone", "mobile"],
        range: 40_000..120_000,
    },
    Category {
        keywords: &["headphone", "earphone", "speaker"],
        range: 5_000..35_000,
    },
    Category {
        keywords: &["shoe", "sneaker", "boot"],
        range: 3_000..18_000,
    },
    Category {
        keywords: &["watch", "sunglass", "glasses"],
        range: 2_000..27_000,
    },
    Category {
        keywords: &["pizza", "burger", "food"],
        range: 200..1_000,
    },
    Category {
        keywords: &["coffee", "tea", "drink"],
        range: 100..1_100,
    },
    Category {
        keywords: &["chocolate", "candy", "sweet"],
        range: 50..350,
    },
    Category {
        keywords: &["plant", "flower"],
        range: 100..600,
    },
    Category {
        keywords: &["book", "magazine"],
        range: 200..1_200,
    },
];

/// Range used when no keyword matches.
pub const DEFAULT_RANGE: Range<u64> = 500..5_500;

/// The half-open rupee range an item's base price is drawn from.
#[must_use]
pub fn price_range(item: &str) -> Range<u64> {
    let lower = item.to_lowercase();
    CATEGORIES
        .iter()
        .find(|category| category.keywords.iter().any(|k| lower.contains(k)))
        .map_or(DEFAULT_RANGE, |category| category.range.clone())
}

/// Estimate a base price using the thread-local random source.
#[must_use]
pub fn estimate_base_price(item: &str) -> u64 {
    estimate_base_price_with(item, &mut rand::rng())
}

/// Estimate a base price drawing from `rng`.
pub fn estimate_base_price_with<R: Rng + ?Sized>(item: &str, rng: &mut R) -> u64 {
    rng.random_range(price_range(item))
}
