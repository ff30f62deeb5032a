//! Cleaner/joiner: merge metadata and descriptions on the game identifier.
//!
//! Rules:
//! - Metadata order is preserved; a repeated metadata id keeps its first row.
//! - A repeated description id keeps its first non-empty text.
//! - Descriptions whose id has no metadata row are dropped.
//! - Games without a usable description are dropped or kept with
//!   `description: None`, per [`MissingDescriptionPolicy`].
//!
//! Output identifiers are therefore unique.

use std::collections::{HashMap, HashSet};

use sense_core::{GameRecord, MissingDescriptionPolicy};
use serde::Serialize;
use tracing::info;

use crate::schema::DescriptionRow;

/// Row accounting for one join.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JoinReport {
    pub metadata_rows: usize,
    pub description_rows: usize,
    /// Metadata rows skipped while mapping (bad identifier).
    pub malformed_metadata: usize,
    /// Description rows skipped while mapping (bad identifier).
    pub malformed_descriptions: usize,
    pub duplicate_metadata: usize,
    pub duplicate_descriptions: usize,
    /// Description rows with no matching metadata row.
    pub orphan_descriptions: usize,
    /// Games with no usable description text.
    pub missing_descriptions: usize,
    /// Games removed because of the `drop` policy.
    pub dropped_missing: usize,
    pub joined: usize,
    /// Name of the description column that was read.
    pub text_column: Option<String>,
}

/// Joined records plus the accounting that produced them.
#[derive(Debug, Clone)]
pub struct Joined {
    pub records: Vec<GameRecord>,
    pub report: JoinReport,
}

/// Join `metadata` with `descriptions` by id.
#[must_use]
pub fn join(
    metadata: Vec<GameRecord>,
    descriptions: Vec<DescriptionRow>,
    policy: MissingDescriptionPolicy,
) -> Joined {
    let mut report = JoinReport {
        metadata_rows: metadata.len(),
        description_rows: descriptions.len(),
        ..JoinReport::default()
    };

    let mut texts: HashMap<u64, Option<String>> = HashMap::with_capacity(descriptions.len());
    for row in descriptions {
        let text = row.text.filter(|t| !t.trim().is_empty());
        match texts.get_mut(&row.id) {
            Some(existing) => {
                report.duplicate_descriptions += 1;
                if existing.is_none() {
                    *existing = text;
                }
            }
            None => {
                texts.insert(row.id, text);
            }
        }
    }

    let mut seen = HashSet::with_capacity(metadata.len());
    let mut records = Vec::with_capacity(metadata.len());
    for mut record in metadata {
        if !seen.insert(record.id) {
            report.duplicate_metadata += 1;
            continue;
        }

        record.description = texts.get(&record.id).cloned().flatten();
        if record.description.is_none() {
            report.missing_descriptions += 1;
            if policy == MissingDescriptionPolicy::Drop {
                report.dropped_missing += 1;
                continue;
            }
        }
        records.push(record);
    }

    report.orphan_descriptions = texts.keys().filter(|id| !seen.contains(id)).count();
    report.joined = records.len();

    info!(
        joined = report.joined,
        orphans = report.orphan_descriptions,
        missing = report.missing_descriptions,
        dropped = report.dropped_missing,
        policy = %policy,
        "joined metadata and descriptions"
    );

    Joined { records, report }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn game(id: u64, name: &str) -> GameRecord {
        GameRecord::new(id, name)
    }

    fn desc(id: u64, text: Option<&str>) -> DescriptionRow {
        DescriptionRow {
            id,
            text: text.map(str::to_string),
        }
    }

    #[test]
    fn neutral_policy_keeps_games_without_text() {
        let joined = join(
            vec![game(1, "A"), game(2, "B")],
            vec![desc(1, Some("Fun."))],
            MissingDescriptionPolicy::Neutral,
        );
        assert_eq!(joined.records.len(), 2);
        assert_eq!(joined.records[0].description.as_deref(), Some("Fun."));
        assert_eq!(joined.records[1].description, None);
        assert_eq!(joined.report.missing_descriptions, 1);
        assert_eq!(joined.report.dropped_missing, 0);
    }

    #[test]
    fn drop_policy_removes_games_without_text() {
        let joined = join(
            vec![game(1, "A"), game(2, "B"), game(3, "C")],
            vec![desc(1, Some("Fun.")), desc(3, Some("   "))],
            MissingDescriptionPolicy::Drop,
        );
        let ids: Vec<u64> = joined.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(joined.report.dropped_missing, 2);
        assert_eq!(joined.report.joined, 1);
    }

    #[test]
    fn orphan_descriptions_are_dropped_and_counted() {
        let joined = join(
            vec![game(1, "A")],
            vec![desc(1, Some("x")), desc(99, Some("ghost")), desc(98, None)],
            MissingDescriptionPolicy::Neutral,
        );
        assert_eq!(joined.records.len(), 1);
        assert_eq!(joined.report.orphan_descriptions, 2);
    }

    #[test]
    fn output_ids_are_unique_even_with_duplicate_inputs() {
        let joined = join(
            vec![game(1, "A"), game(2, "B"), game(1, "A again")],
            vec![
                desc(1, None),
                desc(1, Some("second wins over empty")),
                desc(2, Some("first")),
                desc(2, Some("ignored")),
            ],
            MissingDescriptionPolicy::Neutral,
        );

        let ids: Vec<u64> = joined.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(joined.records[0].name, "A");
        assert_eq!(
            joined.records[0].description.as_deref(),
            Some("second wins over empty")
        );
        assert_eq!(joined.records[1].description.as_deref(), Some("first"));
        assert_eq!(joined.report.duplicate_metadata, 1);
        assert_eq!(joined.report.duplicate_descriptions, 2);
    }

    #[test]
    fn unique_metadata_yields_unique_output_for_any_descriptions() {
        let metadata: Vec<GameRecord> = (0..50).map(|i| game(i, "g")).collect();
        let descriptions: Vec<DescriptionRow> = (0..200)
            .map(|i| desc(i % 70, (i % 3 != 0).then_some("text")))
            .collect();

        for policy in [MissingDescriptionPolicy::Drop, MissingDescriptionPolicy::Neutral] {
            let joined = join(metadata.clone(), descriptions.clone(), policy);
            let unique: HashSet<u64> = joined.records.iter().map(|r| r.id).collect();
            assert_eq!(unique.len(), joined.records.len());
            assert_eq!(
                joined.report.joined + joined.report.dropped_missing,
                metadata.len()
            );
        }
    }
}
