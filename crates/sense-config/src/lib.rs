//! # sense-config
//!
//! Layered configuration loading for steamsense using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`STEAMSENSE_*` prefix, `__` as separator)
//! 2. Project-level `steamsense.toml` in the working directory
//! 3. User-level `~/.config/steamsense/config.toml`
//! 4. Built-in defaults
//!
//! CLI flags are applied on top by the binary after loading.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `STEAMSENSE_DATA__DIR` -> `data.dir`,
//! `STEAMSENSE_ANALYSIS__GROUP_BY` -> `analysis.group_by`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use sense_config::SenseConfig;
//!
//! let config = SenseConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//! println!("reading CSVs from {}", config.data.dir.display());
//! ```

mod analysis;
mod data;
mod error;
mod output;
mod sentiment;

pub use analysis::AnalysisConfig;
pub use data::DataConfig;
pub use error::ConfigError;
pub use output::OutputConfig;
pub use sentiment::SentimentConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the project-local config file.
pub const LOCAL_CONFIG_FILE: &str = "steamsense.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "STEAMSENSE_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SenseConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub sentiment: SentimentConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl SenseConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source is malformed or a value has
    /// the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is the normal case.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.data.validate()?;
        self.sentiment.validate()?;
        self.analysis.validate()?;
        self.output.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("steamsense").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sense_core::{GroupKey, MissingDescriptionPolicy};

    #[test]
    fn default_config_is_valid() {
        let config = SenseConfig::default();
        config.validate().expect("defaults should validate");
        assert_eq!(config.data.dir, PathBuf::from("data"));
        assert_eq!(config.analysis.group_by, GroupKey::Genre);
        assert_eq!(
            config.data.missing_descriptions,
            MissingDescriptionPolicy::Neutral
        );
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: SenseConfig = SenseConfig::figment().extract()?;
            assert_eq!(config.data.metadata_file, "steam.csv");
            assert_eq!(config.analysis.top_n, 15);
            Ok(())
        });
    }
}
