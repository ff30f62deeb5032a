use serde::{Deserialize, Serialize};

use super::game::GameRecord;
use crate::enums::{GroupKey, SentimentLevel};

/// Polarity in `[-1, 1]` and subjectivity in `[0, 1]` for one text.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SentimentScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentimentScore {
    /// The score assigned to empty or unrecognised text.
    pub const NEUTRAL: Self = Self {
        polarity: 0.0,
        subjectivity: 0.0,
    };

    /// Build a score, clamping both components into their ranges.
    ///
    /// NaN components collapse to zero.
    #[must_use]
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        let clamp = |v: f64, lo: f64, hi: f64| if v.is_nan() { 0.0 } else { v.clamp(lo, hi) };
        Self {
            polarity: clamp(polarity, -1.0, 1.0),
            subjectivity: clamp(subjectivity, 0.0, 1.0),
        }
    }

    #[must_use]
    pub fn level(self) -> SentimentLevel {
        SentimentLevel::from_polarity(self.polarity)
    }
}

/// A game together with the score of its description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredGame {
    pub record: GameRecord,
    pub score: SentimentScore,
    /// Tokens left after cleaning and stopword removal.
    pub token_count: usize,
}

impl ScoredGame {
    /// The group label of this game under `key`.
    #[must_use]
    pub fn group_label(&self, key: GroupKey) -> String {
        match key {
            GroupKey::Genre => self.record.primary_genre().to_string(),
            GroupKey::Publisher => self.record.publisher_label().to_string(),
            GroupKey::Developer => self.record.developer_label().to_string(),
            GroupKey::PriceTier => self.record.price_tier().to_string(),
            GroupKey::SentimentLevel => self.score.level().to_string(),
        }
    }
}
