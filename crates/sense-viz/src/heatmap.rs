use std::path::Path;

use plotters::prelude::*;
use sense_stats::CorrelationMatrix;

use crate::error::VizError;
use crate::{ChartSize, palette, segment_label};

/// Annotated heatmap of a correlation matrix.
///
/// # Errors
///
/// Returns an error if the chart cannot be drawn or written.
pub fn render_correlation_heatmap(
    matrix: &CorrelationMatrix,
    path: &Path,
    size: ChartSize,
) -> Result<(), VizError> {
    let n = i32::try_from(matrix.len()).unwrap_or(i32::MAX).max(1);

    let root = SVGBackend::new(path, size.dims()).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Correlation matrix", ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(100)
        .build_cartesian_2d((0..n).into_segmented(), (0..n).into_segmented())?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(matrix.len().max(1))
        .y_labels(matrix.len().max(1))
        .x_label_formatter(&|v| segment_label(&matrix.labels, v))
        .y_label_formatter(&|v| segment_label(&matrix.labels, v))
        .draw()?;

    let cells: Vec<(i32, i32, Option<f64>)> = matrix
        .values
        .iter()
        .zip(0..)
        .flat_map(|(row, i)| row.iter().zip(0..).map(move |(v, j)| (i, j, *v)))
        .collect();

    chart.draw_series(cells.iter().map(|&(i, j, v)| {
        Rectangle::new(
            [
                (SegmentValue::Exact(j), SegmentValue::Exact(i)),
                (SegmentValue::Exact(j + 1), SegmentValue::Exact(i + 1)),
            ],
            palette::diverging(v).filled(),
        )
    }))?;

    chart.draw_series(cells.iter().map(|&(i, j, v)| {
        let text = v.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"));
        Text::new(
            text,
            (SegmentValue::CenterOf(j), SegmentValue::CenterOf(i)),
            ("sans-serif", 14).into_font().color(&BLACK),
        )
    }))?;

    root.present()?;
    Ok(())
}
