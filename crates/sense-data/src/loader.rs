//! CSV discovery and loading.
//!
//! Files are read with `DuckDB`'s `read_csv` into a staging table with every
//! column typed `VARCHAR`, then copied out as [`RawTable`] rows. Typing happens
//! later in [`crate::schema`] so that one bad cell only costs one row.

use std::path::{Path, PathBuf};

use duckdb::Connection;
use serde::Serialize;
use tracing::{debug, warn};

use crate::DataError;

/// Name of the scratch table each file is staged into.
const STAGING_TABLE: &str = "csv_staging";

/// One CSV file held in memory, every cell as optional text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawTable {
    /// File stem, e.g. `steam` for `steam.csv`.
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Index of the first column whose name matches one of `candidates`,
    /// compared case-insensitively after trimming.
    #[must_use]
    pub fn find_column<S: AsRef<str>>(&self, candidates: &[S]) -> Option<usize> {
        candidates.iter().find_map(|candidate| {
            let wanted = candidate.as_ref().trim();
            self.columns
                .iter()
                .position(|c| c.trim().eq_ignore_ascii_case(wanted))
        })
    }

    /// Cell at (`row`, `col`), `None` for nulls and blank strings.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(Option::as_deref)
            .filter(|v| !v.trim().is_empty())
    }
}

/// Shape and preview of one file, as reported by `steamsense inspect`.
#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub file: String,
    pub rows: usize,
    pub columns: Vec<String>,
    pub head: Vec<Vec<Option<String>>>,
    /// Set when the file could not be read; the other fields are then empty.
    pub error: Option<String>,
}

/// List the `*.csv` files directly inside `dir`, sorted by file name.
///
/// # Errors
///
/// Returns [`DataError::MissingInput`] if `dir` does not exist, is not a
/// directory, or holds no CSV files.
pub fn discover_csvs(dir: &Path) -> Result<Vec<PathBuf>, DataError> {
    if !dir.is_dir() {
        return Err(DataError::MissingInput {
            path: dir.to_path_buf(),
            reason: "data directory not found".to_string(),
        });
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv && path.is_file() {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(DataError::MissingInput {
            path: dir.to_path_buf(),
            reason: "no CSV files in data directory".to_string(),
        });
    }

    paths.sort();
    Ok(paths)
}

/// Quote a string as a SQL literal.
fn sql_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Reads CSV files through an in-memory `DuckDB` connection.
pub struct CsvLoader {
    conn: Connection,
    encodings: Vec<String>,
}

impl CsvLoader {
    /// Open a loader that tries `encodings` in order for every file.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::DuckDb`] if the in-memory database cannot be opened.
    pub fn new(encodings: &[String]) -> Result<Self, DataError> {
        let conn = Connection::open_in_memory()?;
        let encodings = if encodings.is_empty() {
            vec!["utf-8".to_string()]
        } else {
            encodings.to_vec()
        };
        Ok(Self { conn, encodings })
    }

    /// Load one CSV file.
    ///
    /// Each encoding is tried strictly first. If every strict attempt fails, a
    /// last lenient pass with the first encoding skips rows `DuckDB` cannot parse.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::MissingInput`] if `path` does not exist and
    /// [`DataError::Unreadable`] if no attempt succeeds.
    pub fn load(&self, path: &Path) -> Result<RawTable, DataError> {
        if !path.is_file() {
            return Err(DataError::MissingInput {
                path: path.to_path_buf(),
                reason: "file not found".to_string(),
            });
        }

        let mut last_error = None;
        for encoding in &self.encodings {
            match self.read_csv(path, encoding, false) {
                Ok(table) => {
                    debug!(
                        file = %path.display(),
                        encoding = %encoding,
                        rows = table.height(),
                        columns = table.width(),
                        "loaded CSV"
                    );
                    return Ok(table);
                }
                Err(error) => {
                    warn!(file = %path.display(), encoding = %encoding, %error, "CSV read failed");
                    last_error = Some(error);
                }
            }
        }

        match self.read_csv(path, &self.encodings[0], true) {
            Ok(table) => {
                warn!(
                    file = %path.display(),
                    rows = table.height(),
                    "loaded CSV leniently; unparsable rows were skipped"
                );
                Ok(table)
            }
            Err(error) => Err(DataError::Unreadable {
                path: path.to_path_buf(),
                reason: last_error.unwrap_or(error).to_string(),
            }),
        }
    }

    /// Describe every CSV in `dir`: row count, columns, and the first `head` rows.
    ///
    /// Files that fail to load are reported with their error instead of
    /// aborting the listing.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::MissingInput`] if `dir` is absent or has no CSV files.
    pub fn inspect_dir(&self, dir: &Path, head: usize) -> Result<Vec<TableSummary>, DataError> {
        let paths = discover_csvs(dir)?;
        let summaries = paths
            .iter()
            .map(|path| {
                let file = path
                    .file_name()
                    .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
                match self.load(path) {
                    Ok(table) => TableSummary {
                        file,
                        rows: table.height(),
                        head: table.rows.iter().take(head).cloned().collect(),
                        columns: table.columns,
                        error: None,
                    },
                    Err(error) => TableSummary {
                        file,
                        rows: 0,
                        columns: Vec::new(),
                        head: Vec::new(),
                        error: Some(error.to_string()),
                    },
                }
            })
            .collect();
        Ok(summaries)
    }

    fn read_csv(&self, path: &Path, encoding: &str, lenient: bool) -> Result<RawTable, DataError> {
        let path_str = path.to_string_lossy();
        self.conn.execute_batch(&format!(
            r#"CREATE OR REPLACE TABLE {STAGING_TABLE} AS
               SELECT * FROM read_csv({path}, header = true, delim = ',', quote = '"',
                                      escape = '"', all_varchar = true,
                                      encoding = {encoding}, ignore_errors = {lenient})"#,
            path = sql_literal(&path_str),
            encoding = sql_literal(encoding),
        ))?;

        let result = self.copy_staging(path);
        self.conn
            .execute_batch(&format!("DROP TABLE IF EXISTS {STAGING_TABLE}"))?;
        result
    }

    fn copy_staging(&self, path: &Path) -> Result<RawTable, DataError> {
        let columns: Vec<String> = {
            let mut stmt = self.conn.prepare(
                "SELECT column_name FROM information_schema.columns
                 WHERE table_name = ?
                 ORDER BY ordinal_position",
            )?;
            stmt.query_map(duckdb::params![STAGING_TABLE], |row| row.get(0))?
                .collect::<Result<Vec<_>, _>>()?
        };

        let width = columns.len();
        let rows: Vec<Vec<Option<String>>> = {
            let mut stmt = self
                .conn
                .prepare(&format!("SELECT * FROM {STAGING_TABLE}"))?;
            stmt.query_map([], |row| {
                (0..width)
                    .map(|i| row.get::<_, Option<String>>(i))
                    .collect::<Result<Vec<_>, _>>()
            })?
            .collect::<Result<Vec<_>, _>>()?
        };

        let name = path
            .file_stem()
            .map_or_else(String::new, |s| s.to_string_lossy().into_owned());
        Ok(RawTable {
            name,
            columns,
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str], rows: &[&[Option<&str>]]) -> RawTable {
        RawTable {
            name: "t".to_string(),
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.map(str::to_string)).collect())
                .collect(),
        }
    }

    #[test]
    fn find_column_respects_candidate_order() {
        let t = table(&["text", "AppID", "short_description"], &[]);
        assert_eq!(t.find_column(&["appid"]), Some(1));
        assert_eq!(t.find_column(&["short_description", "text"]), Some(2));
        assert_eq!(t.find_column(&["review"]), None);
    }

    #[test]
    fn blank_cells_read_as_none() {
        let t = table(&["a", "b"], &[&[Some("  "), Some("x")]]);
        assert_eq!(t.cell(0, 0), None);
        assert_eq!(t.cell(0, 1), Some("x"));
        assert_eq!(t.cell(3, 0), None);
    }

    #[test]
    fn sql_literal_escapes_quotes() {
        assert_eq!(sql_literal("it's.csv"), "'it''s.csv'");
    }

    #[test]
    fn discover_rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = discover_csvs(&missing).unwrap_err();
        assert!(matches!(err, DataError::MissingInput { .. }));
        assert!(err.to_string().contains("data directory not found"));
    }

    #[test]
    fn discover_rejects_directory_without_csvs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "hi").unwrap();
        let err = discover_csvs(dir.path()).unwrap_err();
        assert!(err.to_string().contains("no CSV files"));
    }

    #[test]
    fn discover_sorts_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.csv"), "x\n1\n").unwrap();
        std::fs::write(dir.path().join("a.CSV"), "x\n1\n").unwrap();
        std::fs::write(dir.path().join("c.json"), "{}").unwrap();
        let names: Vec<String> = discover_csvs(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.CSV", "b.csv"]);
    }
}
