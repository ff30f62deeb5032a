//! Pearson correlation.

use serde::{Deserialize, Serialize};
use sense_core::ScoredGame;

use crate::features::NUMERIC_COLUMNS;

/// Pearson correlation coefficient of paired samples.
///
/// Returns `None` with fewer than two pairs, mismatched lengths, or when
/// either side has zero variance.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }
    Some((cov / denom).clamp(-1.0, 1.0))
}

/// Pairwise correlations of the numeric game columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    /// Row-major; `None` where a pair has too few values or no variance.
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    #[must_use]
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| l == row)?;
        let j = self.labels.iter().position(|l| l == col)?;
        self.values[i][j]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Correlate every pair of numeric columns over the games where both are present.
#[must_use]
pub fn correlation_matrix(games: &[ScoredGame]) -> CorrelationMatrix {
    let columns: Vec<Vec<Option<f64>>> = NUMERIC_COLUMNS
        .iter()
        .map(|c| games.iter().map(c.extract).collect())
        .collect();

    let values = columns
        .iter()
        .map(|a| {
            columns
                .iter()
                .map(|b| {
                    let (xs, ys): (Vec<f64>, Vec<f64>) = a
                        .iter()
                        .zip(b)
                        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
                        .unzip();
                    pearson(&xs, &ys)
                })
                .collect()
        })
        .collect();

    CorrelationMatrix {
        labels: NUMERIC_COLUMNS.iter().map(|c| c.name.to_string()).collect(),
        values,
    }
}
