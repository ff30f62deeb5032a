//! Typed column extraction from [`RawTable`]s.
//!
//! Column names are an external contract with the dataset provider, so every
//! column is looked up by a list of candidate names. Only the identifier column
//! is mandatory; absent optional columns leave their fields at defaults.

use sense_core::GameRecord;
use sense_core::owners::parse_owner_range;
use tracing::debug;

use crate::{DataError, RawTable};

const NAME_COLUMNS: [&str; 2] = ["name", "title"];
const GENRE_COLUMNS: [&str; 2] = ["genres", "genre"];
const PUBLISHER_COLUMNS: [&str; 1] = ["publisher"];
const DEVELOPER_COLUMNS: [&str; 1] = ["developer"];
const PRICE_COLUMNS: [&str; 1] = ["price"];
const OWNER_COLUMNS: [&str; 2] = ["owners", "owners_estimate"];
const POSITIVE_COLUMNS: [&str; 2] = ["positive_ratings", "positive"];
const NEGATIVE_COLUMNS: [&str; 2] = ["negative_ratings", "negative"];

/// Metadata rows that parsed, plus the number skipped.
#[derive(Debug, Clone)]
pub struct MappedMetadata {
    pub records: Vec<GameRecord>,
    pub skipped: usize,
}

/// One row of the descriptions table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionRow {
    pub id: u64,
    pub text: Option<String>,
}

/// Description rows that parsed, the text column used, and the number skipped.
#[derive(Debug, Clone)]
pub struct MappedDescriptions {
    pub rows: Vec<DescriptionRow>,
    pub text_column: String,
    pub skipped: usize,
}

/// Parse a game identifier. Integral floats (`"10.0"`) are accepted.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_id(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if let Ok(id) = trimmed.parse::<u64>() {
        return Some(id);
    }
    let float: f64 = trimmed.parse().ok()?;
    (float.is_finite() && float >= 0.0 && float.fract() == 0.0 && float < 1.0e15)
        .then_some(float as u64)
}

/// Parse a price such as `"7.19"` or `"$7.19"`. `"Free"` reads as zero.
fn parse_price(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("free") || trimmed.eq_ignore_ascii_case("free to play") {
        return Some(0.0);
    }
    trimmed
        .trim_start_matches(['$', '£', '€'])
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
}

fn parse_count(raw: &str) -> Option<u64> {
    parse_owner_range(raw)
}

/// Split a `;`-separated genre list (`"Action;Free to Play"`).
fn split_genres(raw: &str) -> Vec<String> {
    raw.split([';', '|'])
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(String::from)
        .collect()
}

fn id_column(table: &RawTable, id_candidates: &[String]) -> Result<usize, DataError> {
    table
        .find_column(id_candidates)
        .ok_or_else(|| DataError::MissingIdColumn {
            table: table.name.clone(),
            tried: id_candidates.join(", "),
        })
}

/// Extract [`GameRecord`]s from the metadata table.
///
/// Rows without a parsable identifier are skipped and counted.
///
/// # Errors
///
/// Returns [`DataError::MissingIdColumn`] if no identifier column exists.
pub fn map_metadata(
    table: &RawTable,
    id_candidates: &[String],
) -> Result<MappedMetadata, DataError> {
    let id_col = id_column(table, id_candidates)?;
    let name_col = table.find_column(&NAME_COLUMNS);
    let genre_col = table.find_column(&GENRE_COLUMNS);
    let publisher_col = table.find_column(&PUBLISHER_COLUMNS);
    let developer_col = table.find_column(&DEVELOPER_COLUMNS);
    let price_col = table.find_column(&PRICE_COLUMNS);
    let owner_col = table.find_column(&OWNER_COLUMNS);
    let positive_col = table.find_column(&POSITIVE_COLUMNS);
    let negative_col = table.find_column(&NEGATIVE_COLUMNS);

    let text = |row: usize, col: Option<usize>| col.and_then(|c| table.cell(row, c));

    let mut records = Vec::with_capacity(table.height());
    let mut skipped = 0usize;
    for row in 0..table.height() {
        let Some(id) = table.cell(row, id_col).and_then(parse_id) else {
            debug!(table = %table.name, row, "skipping metadata row without a valid id");
            skipped += 1;
            continue;
        };

        let mut record = GameRecord::new(id, text(row, name_col).unwrap_or_default().trim());
        record.genres = text(row, genre_col).map(split_genres).unwrap_or_default();
        record.publisher = first_listed(text(row, publisher_col));
        record.developer = first_listed(text(row, developer_col));
        record.price = text(row, price_col).and_then(parse_price).unwrap_or(0.0);
        record.owners = text(row, owner_col).and_then(parse_owner_range);
        record.positive_ratings = text(row, positive_col).and_then(parse_count).unwrap_or(0);
        record.negative_ratings = text(row, negative_col).and_then(parse_count).unwrap_or(0);
        records.push(record);
    }

    Ok(MappedMetadata { records, skipped })
}

/// Publisher and developer cells may list several studios; keep the first.
fn first_listed(raw: Option<&str>) -> String {
    raw.and_then(|v| v.split(';').map(str::trim).find(|s| !s.is_empty()))
        .unwrap_or_default()
        .to_string()
}

/// Extract [`DescriptionRow`]s from the descriptions table.
///
/// The first of `text_candidates` present in the table is used as the text
/// column. Rows without a parsable identifier are skipped and counted.
///
/// # Errors
///
/// Returns [`DataError::MissingIdColumn`] or [`DataError::NoTextColumn`] when
/// the corresponding column cannot be found.
pub fn map_descriptions(
    table: &RawTable,
    id_candidates: &[String],
    text_candidates: &[String],
) -> Result<MappedDescriptions, DataError> {
    let id_col = id_column(table, id_candidates)?;
    let text_col = table
        .find_column(text_candidates)
        .ok_or_else(|| DataError::NoTextColumn {
            table: table.name.clone(),
            tried: text_candidates.join(", "),
        })?;
    let text_column = table.columns[text_col].clone();
    debug!(table = %table.name, column = %text_column, "using description column");

    let mut rows = Vec::with_capacity(table.height());
    let mut skipped = 0usize;
    for row in 0..table.height() {
        let Some(id) = table.cell(row, id_col).and_then(parse_id) else {
            skipped += 1;
            continue;
        };
        rows.push(DescriptionRow {
            id,
            text: table.cell(row, text_col).map(str::to_string),
        });
    }

    Ok(MappedDescriptions {
        rows,
        text_column,
        skipped,
    })
}
