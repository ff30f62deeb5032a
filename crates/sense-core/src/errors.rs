//! Errors raised by the shared record and enum types.
//!
//! Stage-specific errors (`DataError`, `StatsError`, ...) live in their own
//! crates and converge into `anyhow::Error` in `sense-cli`.

use thiserror::Error;

/// Errors raised while parsing the shared enums.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A textual value did not name a known variant.
    #[error("Unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: String,
    },
}

impl CoreError {
    pub(crate) fn unknown(kind: &'static str, value: &str, expected: &[&str]) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}
