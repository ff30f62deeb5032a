use std::path::Path;

use plotters::prelude::*;
use sense_core::{ScoredGame, SuccessProxy};

use crate::error::VizError;
use crate::{ChartSize, palette, value_range};

/// Scatter of description polarity against the success proxy.
///
/// Games without a proxy value are not drawn.
///
/// # Errors
///
/// Returns an error if the chart cannot be drawn or written.
pub fn render_sentiment_scatter(
    games: &[ScoredGame],
    proxy: SuccessProxy,
    path: &Path,
    size: ChartSize,
) -> Result<(), VizError> {
    let points: Vec<(f64, f64)> = games
        .iter()
        .filter_map(|g| Some((g.score.polarity, g.record.success(proxy)?)))
        .filter(|(_, y)| y.is_finite())
        .collect();
    let (lo, hi) = value_range(points.iter().map(|p| p.1), false);

    let y_desc = match proxy {
        SuccessProxy::Owners => "log10(owners + 1)",
        SuccessProxy::Rating => "positive rating share",
    };

    let root = SVGBackend::new(path, size.dims()).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Polarity vs {proxy}"), ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(-1.05_f64..1.05_f64, lo..hi)?;

    chart
        .configure_mesh()
        .x_desc("polarity")
        .y_desc(y_desc)
        .draw()?;

    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, palette::POINT.mix(0.5).filled())),
    )?;

    root.present()?;
    Ok(())
}
