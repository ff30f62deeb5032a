//! # sense-core
//!
//! Core types and error types for steamsense.
//!
//! This crate provides the foundational types shared across all steamsense crates:
//! - Record structs for loaded games, sentiment scores, and aggregate rows
//! - Categorical enums (grouping keys, price tiers, success proxies, sentiment levels)
//! - Owner-estimate parsing for the SteamSpy `"lo-hi"` range format
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod owners;

pub use entities::{AggregateRow, GameRecord, ScoredGame, SentimentScore};
pub use enums::{
    GroupKey, GroupOrder, MissingDescriptionPolicy, PriceTier, SentimentLevel, SuccessProxy,
};
pub use errors::CoreError;
