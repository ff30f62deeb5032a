use serde::{Deserialize, Serialize};

use crate::enums::{PriceTier, SuccessProxy};

/// Label used when a categorical attribute is empty.
pub const UNKNOWN: &str = "Unknown";

/// One game after metadata and description have been joined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameRecord {
    pub id: u64,
    pub name: String,
    /// Genres in dataset order; the first one is the primary genre.
    pub genres: Vec<String>,
    pub publisher: String,
    pub developer: String,
    pub price: f64,
    /// Midpoint of the owner-estimate range.
    pub owners: Option<u64>,
    pub positive_ratings: u64,
    pub negative_ratings: u64,
    pub description: Option<String>,
}

impl GameRecord {
    /// A record with only an id and name; everything else empty.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            genres: Vec::new(),
            publisher: String::new(),
            developer: String::new(),
            price: 0.0,
            owners: None,
            positive_ratings: 0,
            negative_ratings: 0,
            description: None,
        }
    }

    #[must_use]
    pub fn primary_genre(&self) -> &str {
        self.genres
            .first()
            .map(String::as_str)
            .filter(|g| !g.is_empty())
            .unwrap_or(UNKNOWN)
    }

    #[must_use]
    pub fn publisher_label(&self) -> &str {
        non_empty_or_unknown(&self.publisher)
    }

    #[must_use]
    pub fn developer_label(&self) -> &str {
        non_empty_or_unknown(&self.developer)
    }

    #[must_use]
    pub fn price_tier(&self) -> PriceTier {
        PriceTier::from_price(self.price)
    }

    /// Share of positive ratings, `None` when nobody has voted.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn rating(&self) -> Option<f64> {
        // summed as floats so counts near u64::MAX cannot overflow
        let positive = self.positive_ratings as f64;
        let total = positive + self.negative_ratings as f64;
        (total > 0.0).then(|| positive / total)
    }

    /// Value of the chosen success proxy for this game.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn success(&self, proxy: SuccessProxy) -> Option<f64> {
        match proxy {
            SuccessProxy::Owners => self.owners.map(|o| (o as f64 + 1.0).log10()),
            SuccessProxy::Rating => self.rating(),
        }
    }

    #[must_use]
    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty())
    }
}

fn non_empty_or_unknown(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() { UNKNOWN } else { trimmed }
}
