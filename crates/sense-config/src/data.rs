//! Input dataset configuration.

use sense_core::MissingDescriptionPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

fn default_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_metadata_file() -> String {
    "steam.csv".to_string()
}

fn default_descriptions_file() -> String {
    "steam_description_data.csv".to_string()
}

fn default_id_columns() -> Vec<String> {
    ["appid", "steam_appid", "id"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_description_columns() -> Vec<String> {
    [
        "short_description",
        "about_the_game",
        "detailed_description",
        "review",
        "reviews",
        "review_text",
        "text",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_encodings() -> Vec<String> {
    vec!["utf-8".to_string(), "latin-1".to_string()]
}

const fn default_missing_descriptions() -> MissingDescriptionPolicy {
    MissingDescriptionPolicy::Neutral
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// Directory holding the CSV files, relative to the working directory.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// File name of the game metadata table inside `dir`.
    #[serde(default = "default_metadata_file")]
    pub metadata_file: String,

    /// File name of the description text table inside `dir`.
    #[serde(default = "default_descriptions_file")]
    pub descriptions_file: String,

    /// Candidate identifier column names, tried in order.
    #[serde(default = "default_id_columns")]
    pub id_columns: Vec<String>,

    /// Candidate text column names in the descriptions table, tried in order.
    #[serde(default = "default_description_columns")]
    pub description_columns: Vec<String>,

    /// Encodings to try, in order, when a CSV fails to decode.
    #[serde(default = "default_encodings")]
    pub encodings: Vec<String>,

    /// What to do with games whose description is missing or empty.
    #[serde(default = "default_missing_descriptions")]
    pub missing_descriptions: MissingDescriptionPolicy,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            metadata_file: default_metadata_file(),
            descriptions_file: default_descriptions_file(),
            id_columns: default_id_columns(),
            description_columns: default_description_columns(),
            encodings: default_encodings(),
            missing_descriptions: default_missing_descriptions(),
        }
    }
}

impl DataConfig {
    #[must_use]
    pub fn metadata_path(&self) -> PathBuf {
        self.dir.join(&self.metadata_file)
    }

    #[must_use]
    pub fn descriptions_path(&self) -> PathBuf {
        self.dir.join(&self.descriptions_file)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.id_columns.is_empty() {
            return Err(ConfigError::invalid(
                "data.id_columns",
                "at least one candidate column is required",
            ));
        }
        if self.description_columns.is_empty() {
            return Err(ConfigError::invalid(
                "data.description_columns",
                "at least one candidate column is required",
            ));
        }
        if self.encodings.is_empty() {
            return Err(ConfigError::invalid(
                "data.encodings",
                "at least one encoding is required",
            ));
        }
        Ok(())
    }
}
