use std::path::Path;

use plotters::prelude::*;
use sense_core::ScoredGame;

use crate::error::VizError;
use crate::{ChartSize, palette};

const BINS: usize = 20;

/// Bin counts of polarity over `[-1, 1]`; `1.0` lands in the last bin.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub(crate) fn polarity_bins(games: &[ScoredGame]) -> [u32; BINS] {
    let mut counts = [0_u32; BINS];
    for game in games {
        let p = game.score.polarity.clamp(-1.0, 1.0);
        let idx = (((p + 1.0) / 2.0) * BINS as f64).floor() as usize;
        counts[idx.min(BINS - 1)] += 1;
    }
    counts
}

/// Histogram of description polarity.
///
/// # Errors
///
/// Returns an error if the chart cannot be drawn or written.
#[allow(clippy::cast_precision_loss)]
pub fn render_polarity_histogram(
    games: &[ScoredGame],
    path: &Path,
    size: ChartSize,
) -> Result<(), VizError> {
    let counts = polarity_bins(games);
    let top = counts.iter().copied().max().unwrap_or(0) + 1;
    let width = 2.0 / BINS as f64;

    let root = SVGBackend::new(path, size.dims()).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Description polarity", ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(-1.0_f64..1.0_f64, 0_u32..top)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("polarity")
        .y_desc("games")
        .draw()?;

    chart.draw_series(counts.iter().enumerate().map(|(i, &count)| {
        let x0 = (i as f64).mul_add(width, -1.0);
        let colour = palette::polarity(x0 + width / 2.0);
        Rectangle::new([(x0, 0), (x0 + width, count)], colour.filled())
    }))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use sense_core::{GameRecord, SentimentScore};

    use super::*;

    fn at(polarity: f64) -> ScoredGame {
        ScoredGame {
            record: GameRecord::new(1, "x"),
            score: SentimentScore::new(polarity, 0.0),
            token_count: 0,
        }
    }

    #[test]
    fn bins_cover_the_closed_range() {
        let counts = polarity_bins(&[at(-1.0), at(0.0), at(0.0), at(1.0)]);
        assert_eq!(counts[0], 1);
        assert_eq!(counts[BINS / 2], 2);
        assert_eq!(counts[BINS - 1], 1);
        assert_eq!(counts.iter().sum::<u32>(), 4);
    }
}
