//! # sense-sentiment
//!
//! Deterministic, lexicon-based sentiment scoring for game descriptions.
//!
//! Each word found in the [`Lexicon`] contributes a `(polarity, subjectivity)`
//! assessment. An intensifier (`very`, `extremely`) scales the next assessment,
//! and a negation (`not`, `never`) within the three preceding words flips and
//! damps its polarity. The text score is the mean of its assessments, clamped
//! into `[-1, 1] x [0, 1]`. Text without assessments scores `(0.0, 0.0)`.
//!
//! [`text`] holds the cleaning and tokenising used for token counts.

pub mod error;
pub mod lexicon;
pub mod scorer;
pub mod text;

pub use error::SentimentError;
pub use lexicon::{Lexicon, LexiconEntry};
pub use scorer::{LexiconScorer, SentimentScorer, score_games};
pub use text::{clean_text, tokenize};
