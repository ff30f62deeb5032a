//! Numeric columns read off a [`ScoredGame`].

use sense_core::ScoredGame;

/// A named numeric view of a scored game. `None` marks a missing value.
#[derive(Debug, Clone, Copy)]
pub struct NumericColumn {
    pub name: &'static str,
    pub extract: fn(&ScoredGame) -> Option<f64>,
}

#[allow(clippy::cast_precision_loss)]
fn owners(game: &ScoredGame) -> Option<f64> {
    game.record.owners.map(|o| o as f64)
}

#[allow(clippy::cast_precision_loss)]
fn token_count(game: &ScoredGame) -> Option<f64> {
    Some(game.token_count as f64)
}

/// Columns summarised by `describe_games` and correlated by `correlation_matrix`.
pub const NUMERIC_COLUMNS: [NumericColumn; 6] = [
    NumericColumn {
        name: "polarity",
        extract: |g| Some(g.score.polarity),
    },
    NumericColumn {
        name: "subjectivity",
        extract: |g| Some(g.score.subjectivity),
    },
    NumericColumn {
        name: "price",
        extract: |g| g.record.price.is_finite().then_some(g.record.price),
    },
    NumericColumn {
        name: "owners",
        extract: owners,
    },
    NumericColumn {
        name: "rating",
        extract: |g| g.record.rating(),
    },
    NumericColumn {
        name: "token_count",
        extract: token_count,
    },
];

/// Present values of one column, in input order.
pub fn column_values(games: &[ScoredGame], column: &NumericColumn) -> Vec<f64> {
    games.iter().filter_map(column.extract).collect()
}
