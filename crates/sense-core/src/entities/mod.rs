//! Record structs for the steamsense pipeline.
//!
//! A [`GameRecord`] is produced by the joiner, paired with a [`SentimentScore`]
//! into a [`ScoredGame`] by the scorer, and summarised into [`AggregateRow`]s by
//! the aggregator. All of them live only for one run.

mod aggregate;
mod game;
mod score;

pub use aggregate::AggregateRow;
pub use game::{GameRecord, UNKNOWN};
pub use score::{ScoredGame, SentimentScore};
