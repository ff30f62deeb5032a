use std::path::Path;

use plotters::prelude::*;
use sense_core::{AggregateRow, GroupKey};

use crate::error::VizError;
use crate::{ChartSize, palette, segment_label, value_range};

/// Bar chart of mean polarity per group, in row order.
///
/// # Errors
///
/// Returns an error if the chart cannot be drawn or written.
pub fn render_group_bars(
    rows: &[AggregateRow],
    key: GroupKey,
    path: &Path,
    size: ChartSize,
) -> Result<(), VizError> {
    let labels: Vec<String> = rows
        .iter()
        .map(|r| format!("{} ({})", r.key, r.count))
        .collect();
    let n = i32::try_from(rows.len()).unwrap_or(i32::MAX).max(1);
    let (lo, hi) = value_range(rows.iter().map(|r| r.mean_polarity), true);

    let root = SVGBackend::new(path, size.dims()).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Mean polarity by {key}"), ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(90)
        .y_label_area_size(60)
        .build_cartesian_2d((0..n).into_segmented(), lo..hi)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(rows.len().max(1))
        .x_label_formatter(&|v| segment_label(&labels, v))
        .x_label_style(("sans-serif", 12).into_font().transform(FontTransform::Rotate90))
        .y_desc("mean polarity")
        .draw()?;

    chart.draw_series(rows.iter().zip(0..).map(|(row, i)| {
        let style = palette::polarity(row.mean_polarity).filled();
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), row.mean_polarity),
            ],
            style,
        );
        bar.set_margin(0, 0, 6, 6);
        bar
    }))?;

    root.present()?;
    Ok(())
}
