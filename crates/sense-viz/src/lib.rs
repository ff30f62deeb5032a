//! # sense-viz
//!
//! SVG charts of a steamsense run, drawn with `plotters`:
//!
//! - group bars: mean polarity per group,
//! - sentiment scatter: polarity against the success proxy,
//! - correlation heatmap of the numeric game columns,
//! - polarity histogram.
//!
//! [`render_all`] writes every chart into one directory and returns the paths.

mod bars;
pub mod error;
mod heatmap;
mod histogram;
mod palette;
mod scatter;

use std::path::{Path, PathBuf};

use plotters::prelude::SegmentValue;

use sense_core::{AggregateRow, GroupKey, ScoredGame, SuccessProxy};
use sense_stats::CorrelationMatrix;

pub use bars::render_group_bars;
pub use error::VizError;
pub use heatmap::render_correlation_heatmap;
pub use histogram::render_polarity_histogram;
pub use scatter::render_sentiment_scatter;

/// Pixel size of every chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

impl ChartSize {
    pub(crate) const fn dims(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Everything the chart set is drawn from.
#[derive(Debug, Clone, Copy)]
pub struct ChartInputs<'a> {
    pub games: &'a [ScoredGame],
    pub rows: &'a [AggregateRow],
    pub matrix: &'a CorrelationMatrix,
    pub key: GroupKey,
    pub proxy: SuccessProxy,
}

/// Render every chart into `dir`, creating it if needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a chart fails to draw.
pub fn render_all(
    dir: &Path,
    inputs: &ChartInputs<'_>,
    size: ChartSize,
) -> Result<Vec<PathBuf>, VizError> {
    std::fs::create_dir_all(dir).map_err(|source| VizError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let bars = dir.join(format!("group_{}.svg", inputs.key));
    render_group_bars(inputs.rows, inputs.key, &bars, size)?;

    let scatter = dir.join(format!("sentiment_vs_{}.svg", inputs.proxy));
    render_sentiment_scatter(inputs.games, inputs.proxy, &scatter, size)?;

    let heatmap = dir.join("correlation_heatmap.svg");
    render_correlation_heatmap(inputs.matrix, &heatmap, size)?;

    let histogram = dir.join("polarity_histogram.svg");
    render_polarity_histogram(inputs.games, &histogram, size)?;

    let paths = vec![bars, scatter, heatmap, histogram];
    for path in &paths {
        tracing::info!(path = %path.display(), "wrote chart");
    }
    Ok(paths)
}

/// Axis label for the centre of a segmented `i32` coordinate.
pub(crate) fn segment_label(labels: &[String], value: &SegmentValue<i32>) -> String {
    match value {
        SegmentValue::CenterOf(i) => usize::try_from(*i)
            .ok()
            .and_then(|i| labels.get(i))
            .cloned()
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Padded `(lo, hi)` covering `values` and zero.
pub(crate) fn value_range(values: impl Iterator<Item = f64>, include_zero: bool) -> (f64, f64) {
    let (mut lo, mut hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if lo > hi {
        return (0.0, 1.0);
    }
    if include_zero {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 0.5 };
    (lo - pad, hi + pad)
}
