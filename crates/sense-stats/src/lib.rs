//! # sense-stats
//!
//! Numbers derived from scored games:
//!
//! - [`describe`] and [`describe_games`]: per-column summary statistics.
//! - [`aggregate`]: one [`AggregateRow`](sense_core::AggregateRow) per group.
//! - [`pearson`] and [`correlation_matrix`]: linear correlation.
//! - [`Predictor`]: a ridge-stabilised least-squares model of a success proxy.

pub mod aggregate;
pub mod correlation;
pub mod describe;
pub mod error;
pub mod features;
pub mod predictor;

pub use aggregate::{AggregateOptions, aggregate};
pub use correlation::{CorrelationMatrix, correlation_matrix, pearson};
pub use describe::{Summary, describe, describe_games};
pub use error::StatsError;
pub use predictor::{ModelReport, Predictor};
