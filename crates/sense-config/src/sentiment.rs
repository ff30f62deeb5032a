//! Sentiment scorer configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

const fn default_negation_factor() -> f64 {
    -0.5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SentimentConfig {
    /// Optional JSON lexicon merged over the built-in one.
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,

    /// Multiplier applied to a polarity preceded by a negation word.
    #[serde(default = "default_negation_factor")]
    pub negation_factor: f64,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            lexicon_path: None,
            negation_factor: default_negation_factor(),
        }
    }
}

impl SentimentConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(-1.0..=0.0).contains(&self.negation_factor) {
            return Err(ConfigError::invalid(
                "sentiment.negation_factor",
                format!("{} is outside [-1, 0]", self.negation_factor),
            ));
        }
        Ok(())
    }
}
