//! Ridge-stabilised least squares on sentiment and metadata features.
//!
//! Features are standardised on the training rows before fitting, so the
//! reported coefficients are per standard deviation of each feature and the
//! intercept is the training mean of the target. Every `k`-th usable game is
//! held out for evaluation, which keeps the split deterministic.

use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};
use sense_core::{ScoredGame, SuccessProxy};

use crate::error::StatsError;

/// Feature names in design-matrix column order.
pub const FEATURES: [&str; 5] = ["polarity", "subjectivity", "price", "token_count", "is_free"];

#[allow(clippy::cast_precision_loss)]
fn feature_row(game: &ScoredGame) -> [f64; 5] {
    let price = if game.record.price.is_finite() {
        game.record.price.max(0.0)
    } else {
        0.0
    };
    [
        game.score.polarity,
        game.score.subjectivity,
        price,
        game.token_count as f64,
        if price <= 0.0 { 1.0 } else { 0.0 },
    ]
}

/// Fit metrics and coefficients of one [`Predictor`] run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelReport {
    pub target: SuccessProxy,
    pub features: Vec<String>,
    /// Coefficient per standardised feature, in `features` order.
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    /// `None` when the target has no variance on that split.
    pub r2_train: Option<f64>,
    pub r2_test: Option<f64>,
    pub rmse_test: Option<f64>,
    pub n_train: usize,
    pub n_test: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Predictor {
    ridge: f64,
    holdout_every: usize,
}

impl Default for Predictor {
    fn default() -> Self {
        Self {
            ridge: 1e-6,
            holdout_every: 5,
        }
    }
}

impl Predictor {
    /// Predictor holding out roughly `test_fraction` of the rows.
    ///
    /// # Errors
    ///
    /// Returns an error if `ridge` is negative or `test_fraction` is outside `(0, 1)`.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn new(ridge: f64, test_fraction: f64) -> Result<Self, StatsError> {
        if !(ridge >= 0.0 && ridge.is_finite()) {
            return Err(StatsError::InvalidParameter(format!(
                "ridge must be a non-negative number, got {ridge}"
            )));
        }
        if !(test_fraction > 0.0 && test_fraction < 1.0) {
            return Err(StatsError::InvalidParameter(format!(
                "test fraction must be in (0, 1), got {test_fraction}"
            )));
        }
        let holdout_every = ((1.0 / test_fraction).round() as usize).max(2);
        Ok(Self {
            ridge,
            holdout_every,
        })
    }

    #[must_use]
    pub const fn holdout_every(&self) -> usize {
        self.holdout_every
    }

    /// Fit the success proxy of `games` and evaluate on the held-out rows.
    ///
    /// Games without a proxy value are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InsufficientData`] with fewer than
    /// `FEATURES.len() + 2` usable games, and [`StatsError::Singular`] when the
    /// normal equations cannot be solved.
    pub fn fit(&self, games: &[ScoredGame], proxy: SuccessProxy) -> Result<ModelReport, StatsError> {
        let usable: Vec<([f64; 5], f64)> = games
            .iter()
            .filter_map(|g| Some((feature_row(g), g.record.success(proxy)?)))
            .filter(|(_, y)| y.is_finite())
            .collect();

        let needed = FEATURES.len() + 2;
        if usable.len() < needed {
            return Err(StatsError::InsufficientData {
                needed,
                got: usable.len(),
            });
        }

        let (train, test): (Vec<_>, Vec<_>) = usable
            .into_iter()
            .enumerate()
            .partition(|(i, _)| (i + 1) % self.holdout_every != 0);

        let (x_train, y_train) = design(train.iter().map(|(_, row)| row))?;
        let (x_test, y_test) = design(test.iter().map(|(_, row)| row))?;

        let means = x_train.mean_axis(Axis(0)).unwrap_or_else(|| Array1::zeros(FEATURES.len()));
        let stds = x_train.std_axis(Axis(0), 0.0).mapv(|s| if s > 0.0 { s } else { 1.0 });
        let standardise = |x: &Array2<f64>| (x - &means) / &stds;

        let z_train = standardise(&x_train);
        let intercept = y_train.mean().unwrap_or(0.0);
        let centred = &y_train - intercept;

        let mut gram = z_train.t().dot(&z_train);
        for i in 0..gram.nrows() {
            gram[[i, i]] += self.ridge;
        }
        let rhs = z_train.t().dot(&centred);
        let beta = cholesky_solve(&gram, &rhs).ok_or(StatsError::Singular)?;

        let train_pred = z_train.dot(&beta) + intercept;
        let (r2_test, rmse_test) = if y_test.is_empty() {
            (None, None)
        } else {
            let test_pred = standardise(&x_test).dot(&beta) + intercept;
            (r_squared(&y_test, &test_pred), Some(rmse(&y_test, &test_pred)))
        };

        let report = ModelReport {
            target: proxy,
            features: FEATURES.iter().map(|f| (*f).to_string()).collect(),
            coefficients: beta.to_vec(),
            intercept,
            r2_train: r_squared(&y_train, &train_pred),
            r2_test,
            rmse_test,
            n_train: y_train.len(),
            n_test: y_test.len(),
        };
        tracing::debug!(
            n_train = report.n_train,
            n_test = report.n_test,
            r2_test = ?report.r2_test,
            "fitted success model"
        );
        Ok(report)
    }
}

fn design<'a>(
    rows: impl Iterator<Item = &'a ([f64; 5], f64)>,
) -> Result<(Array2<f64>, Array1<f64>), StatsError> {
    let mut flat = Vec::new();
    let mut targets = Vec::new();
    for (features, y) in rows {
        flat.extend_from_slice(features);
        targets.push(*y);
    }
    let x = Array2::from_shape_vec((targets.len(), FEATURES.len()), flat)?;
    Ok((x, Array1::from(targets)))
}

/// Solve `a x = b` for symmetric positive-definite `a`.
fn cholesky_solve(a: &Array2<f64>, b: &Array1<f64>) -> Option<Array1<f64>> {
    let n = a.nrows();
    let mut l = Array2::<f64>::zeros((n, n));

    for i in 0..n {
        for j in 0..=i {
            let sum: f64 = (0..j).map(|k| l[[i, k]] * l[[j, k]]).sum();
            if i == j {
                let diag = a[[i, i]] - sum;
                if diag <= f64::EPSILON {
                    return None;
                }
                l[[i, j]] = diag.sqrt();
            } else {
                l[[i, j]] = (a[[i, j]] - sum) / l[[j, j]];
            }
        }
    }

    // forward: L z = b
    let mut z = Array1::<f64>::zeros(n);
    for i in 0..n {
        let sum: f64 = (0..i).map(|j| l[[i, j]] * z[j]).sum();
        z[i] = (b[i] - sum) / l[[i, i]];
    }

    // backward: L^T x = z
    let mut x = Array1::<f64>::zeros(n);
    for i in (0..n).rev() {
        let sum: f64 = ((i + 1)..n).map(|j| l[[j, i]] * x[j]).sum();
        x[i] = (z[i] - sum) / l[[i, i]];
    }
    Some(x)
}

fn r_squared(actual: &Array1<f64>, predicted: &Array1<f64>) -> Option<f64> {
    let mean = actual.mean()?;
    let ss_tot: f64 = actual.iter().map(|y| (y - mean).powi(2)).sum();
    if ss_tot <= f64::EPSILON {
        return None;
    }
    let ss_res: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(y, p)| (y - p).powi(2))
        .sum();
    Some(1.0 - ss_res / ss_tot)
}

#[allow(clippy::cast_precision_loss)]
fn rmse(actual: &Array1<f64>, predicted: &Array1<f64>) -> f64 {
    let mse = actual
        .iter()
        .zip(predicted)
        .map(|(y, p)| (y - p).powi(2))
        .sum::<f64>()
        / actual.len() as f64;
    mse.sqrt()
}
