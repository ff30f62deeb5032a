//! Chart files land on disk as SVG.

use pretty_assertions::assert_eq;
use sense_core::{GameRecord, GroupKey, ScoredGame, SentimentScore, SuccessProxy};
use sense_stats::{AggregateOptions, aggregate, correlation_matrix};
use sense_viz::{ChartInputs, ChartSize, render_all, render_group_bars};

fn games() -> Vec<ScoredGame> {
    (0..12_u32)
        .map(|i| {
            let mut record = GameRecord::new(u64::from(i), format!("game {i}"));
            record.genres = vec![["Action", "Puzzle", "RPG"][(i % 3) as usize].to_string()];
            record.price = f64::from(i % 4) * 5.0;
            record.owners = Some(u64::from(i + 1) * 10_000);
            record.positive_ratings = u64::from(50 + i);
            record.negative_ratings = 10;
            ScoredGame {
                record,
                score: SentimentScore::new(f64::from(i) / 6.0 - 1.0, 0.5),
                token_count: i as usize,
            }
        })
        .collect()
}

fn is_svg(path: &std::path::Path) -> bool {
    std::fs::read_to_string(path).is_ok_and(|s| s.contains("<svg"))
}

#[test]
fn render_all_writes_four_charts() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("charts");
    let games = games();
    let rows = aggregate(
        &games,
        GroupKey::Genre,
        SuccessProxy::Owners,
        AggregateOptions::default(),
    );
    let matrix = correlation_matrix(&games);

    let paths = render_all(
        &out,
        &ChartInputs {
            games: &games,
            rows: &rows,
            matrix: &matrix,
            key: GroupKey::Genre,
            proxy: SuccessProxy::Owners,
        },
        ChartSize::default(),
    )
    .unwrap();

    let names: Vec<String> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        [
            "group_genre.svg",
            "sentiment_vs_owners.svg",
            "correlation_heatmap.svg",
            "polarity_histogram.svg"
        ]
    );
    assert!(paths.iter().all(|p| is_svg(p)));
}

#[test]
fn empty_inputs_still_render() {
    let dir = tempfile::tempdir().unwrap();
    let matrix = correlation_matrix(&[]);
    let paths = render_all(
        dir.path(),
        &ChartInputs {
            games: &[],
            rows: &[],
            matrix: &matrix,
            key: GroupKey::Publisher,
            proxy: SuccessProxy::Rating,
        },
        ChartSize {
            width: 400,
            height: 300,
        },
    )
    .unwrap();
    assert_eq!(paths.len(), 4);
    assert!(paths.iter().all(|p| is_svg(p)));
}

#[test]
fn group_bars_label_groups() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bars.svg");
    let rows = aggregate(
        &games(),
        GroupKey::Genre,
        SuccessProxy::Rating,
        AggregateOptions::default(),
    );

    render_group_bars(&rows, GroupKey::Genre, &path, ChartSize::default()).unwrap();
    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("Puzzle (4)"));
}
