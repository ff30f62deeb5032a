//! Summary statistics in the shape of a dataframe `describe()`.

use serde::{Deserialize, Serialize};
use sense_core::ScoredGame;

use crate::features::{NUMERIC_COLUMNS, column_values};

/// Count, moments and quartiles of one numeric column.
///
/// Non-finite inputs are ignored. With no values every statistic is NaN;
/// with one value `std` is NaN (sample standard deviation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
}

impl Summary {
    const EMPTY: Self = Self {
        count: 0,
        mean: f64::NAN,
        std: f64::NAN,
        min: f64::NAN,
        p25: f64::NAN,
        median: f64::NAN,
        p75: f64::NAN,
        max: f64::NAN,
    };
}

/// Linear-interpolated quantile of sorted, non-empty data.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn describe(values: &[f64]) -> Summary {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return Summary::EMPTY;
    }
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let std = if n > 1 {
        let ss: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (n - 1) as f64).sqrt()
    } else {
        f64::NAN
    };

    Summary {
        count: n,
        mean,
        std,
        min: sorted[0],
        p25: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        p75: quantile(&sorted, 0.75),
        max: sorted[n - 1],
    }
}

/// One summary per numeric column of the scored games.
#[must_use]
pub fn describe_games(games: &[ScoredGame]) -> Vec<(String, Summary)> {
    NUMERIC_COLUMNS
        .iter()
        .map(|column| {
            let summary = describe(&column_values(games, column));
            (column.name.to_string(), summary)
        })
        .collect()
}
