//! Chart output configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

fn default_dir() -> PathBuf {
    PathBuf::from("output")
}

const fn default_charts() -> bool {
    true
}

const fn default_width() -> u32 {
    1024
}

const fn default_height() -> u32 {
    768
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory charts are written into; created on demand.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_charts")]
    pub charts: bool,

    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            charts: default_charts(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl OutputConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 200 || self.height < 150 {
            return Err(ConfigError::invalid(
                "output.width/height",
                format!("{}x{} is too small to draw on", self.width, self.height),
            ));
        }
        Ok(())
    }
}
