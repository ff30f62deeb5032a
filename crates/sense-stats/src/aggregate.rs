//! Group-by aggregation of scored games.

use std::collections::BTreeMap;

use sense_core::{AggregateRow, GroupKey, GroupOrder, ScoredGame, SuccessProxy};

use crate::correlation::pearson;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateOptions {
    pub order: GroupOrder,
    /// Groups with fewer members are left out.
    pub min_group_size: usize,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            order: GroupOrder::Count,
            min_group_size: 1,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = values.len();
    values.sum::<f64>() / n as f64
}

/// Group `games` by `key` and summarise each group.
///
/// Every game lands in exactly one group, so with `min_group_size == 1` the
/// counts sum to `games.len()`. `correlation` relates polarity to the success
/// proxy over the members that have a proxy value.
#[must_use]
pub fn aggregate(
    games: &[ScoredGame],
    key: GroupKey,
    proxy: SuccessProxy,
    options: AggregateOptions,
) -> Vec<AggregateRow> {
    let mut groups: BTreeMap<String, Vec<&ScoredGame>> = BTreeMap::new();
    for game in games {
        groups.entry(game.group_label(key)).or_default().push(game);
    }

    let mut rows: Vec<AggregateRow> = groups
        .into_iter()
        .filter(|(_, members)| members.len() >= options.min_group_size)
        .map(|(label, members)| {
            let (polarities, successes): (Vec<f64>, Vec<f64>) = members
                .iter()
                .filter_map(|g| Some((g.score.polarity, g.record.success(proxy)?)))
                .unzip();

            AggregateRow {
                key: label,
                count: members.len(),
                mean_polarity: mean(members.iter().map(|g| g.score.polarity)),
                mean_subjectivity: mean(members.iter().map(|g| g.score.subjectivity)),
                mean_success: (!successes.is_empty()).then(|| mean(successes.iter().copied())),
                correlation: pearson(&polarities, &successes),
            }
        })
        .collect();

    // BTreeMap iteration already yields key order; the sort is stable.
    if options.order == GroupOrder::Count {
        rows.sort_by(|a, b| b.count.cmp(&a.count));
    }

    tracing::debug!(key = %key, groups = rows.len(), "aggregated games");
    rows
}
