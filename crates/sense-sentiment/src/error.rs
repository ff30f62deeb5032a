//! Sentiment error types.

use std::path::PathBuf;

/// Errors raised while building a scorer. Scoring itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum SentimentError {
    #[error("failed to read lexicon {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lexicon {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A lexicon entry lies outside the valid score ranges.
    #[error("invalid lexicon entry '{word}': {reason}")]
    InvalidEntry { word: String, reason: String },
}
