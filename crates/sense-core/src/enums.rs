//! Categorical enums for steamsense.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and parse from the same strings through [`FromStr`], so config files, env
//! vars, and CLI flags all accept one spelling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Find the variant whose `as_str` matches `value`, case-insensitively.
fn parse_variant<T: Copy>(
    kind: &'static str,
    value: &str,
    all: &[T],
    as_str: fn(T) -> &'static str,
) -> Result<T, CoreError> {
    let wanted = value.trim().to_ascii_lowercase().replace('-', "_");
    all.iter()
        .copied()
        .find(|v| as_str(*v) == wanted)
        .ok_or_else(|| {
            let expected: Vec<&str> = all.iter().map(|v| as_str(*v)).collect();
            CoreError::unknown(kind, value, &expected)
        })
}

// ---------------------------------------------------------------------------
// PriceTier
// ---------------------------------------------------------------------------

/// Price bucket of a game, in the dataset's currency.
///
/// ```text
/// free      price == 0
/// budget    0 < price < 5
/// standard  5 <= price < 15
/// premium   15 <= price < 30
/// flagship  price >= 30
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    Free,
    Budget,
    Standard,
    Premium,
    Flagship,
}

impl PriceTier {
    pub const ALL: [Self; 5] = [
        Self::Free,
        Self::Budget,
        Self::Standard,
        Self::Premium,
        Self::Flagship,
    ];

    /// Bucket a price. Negative and NaN prices are treated as free.
    #[must_use]
    pub fn from_price(price: f64) -> Self {
        if price.is_nan() || price <= 0.0 {
            Self::Free
        } else if price < 5.0 {
            Self::Budget
        } else if price < 15.0 {
            Self::Standard
        } else if price < 30.0 {
            Self::Premium
        } else {
            Self::Flagship
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Budget => "budget",
            Self::Standard => "standard",
            Self::Premium => "premium",
            Self::Flagship => "flagship",
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("price tier", s, &Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// SentimentLevel
// ---------------------------------------------------------------------------

/// Coarse sentiment bucket derived from a polarity score.
///
/// ```text
/// very_negative  polarity < -0.5
/// negative       -0.5 <= polarity < -0.1
/// neutral        -0.1 <= polarity <= 0.1
/// positive       0.1 < polarity <= 0.5
/// very_positive  polarity > 0.5
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLevel {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    VeryPositive,
}

impl SentimentLevel {
    pub const ALL: [Self; 5] = [
        Self::VeryNegative,
        Self::Negative,
        Self::Neutral,
        Self::Positive,
        Self::VeryPositive,
    ];

    #[must_use]
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity < -0.5 {
            Self::VeryNegative
        } else if polarity < -0.1 {
            Self::Negative
        } else if polarity <= 0.1 {
            Self::Neutral
        } else if polarity <= 0.5 {
            Self::Positive
        } else {
            Self::VeryPositive
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryNegative => "very_negative",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Positive => "positive",
            Self::VeryPositive => "very_positive",
        }
    }
}

impl fmt::Display for SentimentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// GroupKey
// ---------------------------------------------------------------------------

/// Categorical attribute the aggregator groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    /// First genre listed for the game.
    Genre,
    Publisher,
    Developer,
    PriceTier,
    SentimentLevel,
}

impl GroupKey {
    pub const ALL: [Self; 5] = [
        Self::Genre,
        Self::Publisher,
        Self::Developer,
        Self::PriceTier,
        Self::SentimentLevel,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Genre => "genre",
            Self::Publisher => "publisher",
            Self::Developer => "developer",
            Self::PriceTier => "price_tier",
            Self::SentimentLevel => "sentiment_level",
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("group key", s, &Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// SuccessProxy
// ---------------------------------------------------------------------------

/// Stand-in target for market performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessProxy {
    /// `log10(1 + owners)` of the owner-estimate midpoint.
    Owners,
    /// Share of positive ratings, in `[0, 1]`.
    Rating,
}

impl SuccessProxy {
    pub const ALL: [Self; 2] = [Self::Owners, Self::Rating];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owners => "owners",
            Self::Rating => "rating",
        }
    }
}

impl fmt::Display for SuccessProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SuccessProxy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("success proxy", s, &Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// GroupOrder
// ---------------------------------------------------------------------------

/// Ordering of aggregate rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupOrder {
    /// Descending count, ties broken by key.
    Count,
    /// Ascending key.
    Key,
}

impl GroupOrder {
    pub const ALL: [Self; 2] = [Self::Count, Self::Key];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Key => "key",
        }
    }
}

impl fmt::Display for GroupOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("group order", s, &Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// MissingDescriptionPolicy
// ---------------------------------------------------------------------------

/// What the joiner does with a game that has no usable description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingDescriptionPolicy {
    /// Exclude the game from the joined table.
    Drop,
    /// Keep the game; the scorer assigns it a neutral `(0.0, 0.0)` score.
    Neutral,
}

impl MissingDescriptionPolicy {
    pub const ALL: [Self; 2] = [Self::Drop, Self::Neutral];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Drop => "drop",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for MissingDescriptionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MissingDescriptionPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("missing-description policy", s, &Self::ALL, Self::as_str)
    }
}
