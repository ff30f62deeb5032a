//! # sense-data
//!
//! Dataset loading and cleaning for steamsense.
//!
//! ## Stages
//!
//! 1. **Discover**: list the `*.csv` files of the data directory
//!    ([`discover_csvs`]). A missing directory is a [`DataError::MissingInput`].
//! 2. **Load**: read each file into a [`RawTable`] through an in-memory `DuckDB`
//!    connection ([`CsvLoader`]), trying each configured encoding in turn.
//! 3. **Map**: pull typed columns out of the raw tables ([`schema`]), skipping
//!    rows whose identifier is missing or unparsable.
//! 4. **Join**: merge metadata and descriptions on the game identifier
//!    ([`join()`]), applying the missing-description policy.

pub mod error;
pub mod join;
pub mod loader;
pub mod schema;

pub use error::DataError;
pub use join::{JoinReport, Joined, join};
pub use loader::{CsvLoader, RawTable, TableSummary, discover_csvs};
pub use schema::{DescriptionRow, MappedDescriptions, MappedMetadata};

use sense_config::DataConfig;
use tracing::info;

/// The two raw tables the pipeline needs.
#[derive(Debug, Clone)]
pub struct RawDataset {
    pub metadata: RawTable,
    pub descriptions: RawTable,
}

/// Load the metadata and descriptions tables named in `config`.
///
/// Nothing is returned unless both tables load.
///
/// # Errors
///
/// Returns [`DataError::MissingInput`] if the data directory or either file is
/// absent, and [`DataError::Unreadable`] if a file cannot be parsed with any
/// configured encoding.
pub fn load_dataset(loader: &CsvLoader, config: &DataConfig) -> Result<RawDataset, DataError> {
    let available = discover_csvs(&config.dir)?;
    info!(
        dir = %config.dir.display(),
        files = available.len(),
        "discovered CSV files"
    );

    let metadata_path = config.metadata_path();
    let descriptions_path = config.descriptions_path();
    for path in [&metadata_path, &descriptions_path] {
        if !path.is_file() {
            return Err(DataError::MissingInput {
                path: path.clone(),
                reason: "expected CSV file not found".to_string(),
            });
        }
    }

    let metadata = loader.load(&metadata_path)?;
    let descriptions = loader.load(&descriptions_path)?;
    Ok(RawDataset {
        metadata,
        descriptions,
    })
}

/// Load, map, and join in one call, the way `steamsense run` does.
///
/// # Errors
///
/// Any error from [`load_dataset`] or the column mapping in [`schema`].
pub fn load_joined(loader: &CsvLoader, config: &DataConfig) -> Result<Joined, DataError> {
    let raw = load_dataset(loader, config)?;
    let metadata = schema::map_metadata(&raw.metadata, &config.id_columns)?;
    let descriptions = schema::map_descriptions(
        &raw.descriptions,
        &config.id_columns,
        &config.description_columns,
    )?;

    let mut joined = join(
        metadata.records,
        descriptions.rows,
        config.missing_descriptions,
    );
    joined.report.malformed_metadata = metadata.skipped;
    joined.report.malformed_descriptions = descriptions.skipped;
    joined.report.text_column = Some(descriptions.text_column);
    Ok(joined)
}
