//! Rupee amounts and their display format.
//!
//! Every currency value the system emits is an integer number of rupees
//! rendered with Indian digit grouping: the last three digits form one group
//! and every group before it has two digits (`₹12,34,567`). Negative amounts
//! carry the sign before the glyph (`-₹3,000`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The Indian rupee sign.
pub const RUPEE_SIGN: char = '₹';

/// Errors from parsing a formatted rupee string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceParseError {
    /// The string does not carry the rupee sign.
    #[error("missing rupee sign in {0:?}")]
    MissingSymbol(String),

    /// The amount contains something other than digits and group separators.
    #[error("invalid amount in {0:?}")]
    InvalidAmount(String),
}

/// A whole number of rupees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rupees(i64);

impl Rupees {
    /// Create an amount.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Create an amount from an unsigned value, saturating at `i64::MAX`.
    #[must_use]
    pub fn from_unsigned(amount: u64) -> Self {
        Self(i64::try_from(amount).unwrap_or(i64::MAX))
    }

    /// The raw amount.
    #[must_use]
    pub const fn amount(self) -> i64 {
        self.0
    }

    /// The negated amount, used for discount lines.
    #[must_use]
    pub const fn negated(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            f.write_str("-")?;
        }
        write!(f, "{RUPEE_SIGN}{}", group_indian(self.0.unsigned_abs()))
    }
}

impl FromStr for Rupees {
    type Err = PriceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, rest) = trimmed
            .strip_prefix('-')
            .map_or((false, trimmed), |rest| (true, rest));
        let digits = rest
            .strip_prefix(RUPEE_SIGN)
            .ok_or_else(|| PriceParseError::MissingSymbol(s.to_string()))?;

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == ',') {
            return Err(PriceParseError::InvalidAmount(s.to_string()));
        }

        let amount = digits
            .chars()
            .filter(char::is_ascii_digit)
            .collect::<String>()
            .parse::<i64>()
            .map_err(|_| PriceParseError::InvalidAmount(s.to_string()))?;

        Ok(Self(if negative { -amount } else { amount }))
    }
}

impl From<i64> for Rupees {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

/// Group digits the Indian way: `1234567` becomes `12,34,567`.
fn group_indian(amount: u64) -> String {
    let digits = amount.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 2);

    for (i, c) in digits.chars().enumerate() {
        // Digits from this one to the end, inclusive.
        let remaining = len - i;
        if i > 0 && remaining >= 3 && (remaining - 3) % 2 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
