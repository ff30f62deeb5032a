//! Aggregation and prediction configuration.

use sense_core::{GroupKey, GroupOrder, SuccessProxy};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_group_by() -> GroupKey {
    GroupKey::Genre
}

const fn default_order() -> GroupOrder {
    GroupOrder::Count
}

const fn default_min_group_size() -> usize {
    1
}

const fn default_success_proxy() -> SuccessProxy {
    SuccessProxy::Owners
}

const fn default_top_n() -> usize {
    15
}

const fn default_test_fraction() -> f64 {
    0.2
}

const fn default_ridge() -> f64 {
    1e-6
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_group_by")]
    pub group_by: GroupKey,

    #[serde(default = "default_order")]
    pub order: GroupOrder,

    /// Groups smaller than this are left out of the aggregate table.
    #[serde(default = "default_min_group_size")]
    pub min_group_size: usize,

    #[serde(default = "default_success_proxy")]
    pub success_proxy: SuccessProxy,

    /// Number of groups drawn in the bar chart.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Share of rows held out to evaluate the predictor.
    #[serde(default = "default_test_fraction")]
    pub test_fraction: f64,

    /// Ridge term added to the normal-equation diagonal.
    #[serde(default = "default_ridge")]
    pub ridge: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            group_by: default_group_by(),
            order: default_order(),
            min_group_size: default_min_group_size(),
            success_proxy: default_success_proxy(),
            top_n: default_top_n(),
            test_fraction: default_test_fraction(),
            ridge: default_ridge(),
        }
    }
}

impl AnalysisConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.min_group_size == 0 {
            return Err(ConfigError::invalid(
                "analysis.min_group_size",
                "must be at least 1",
            ));
        }
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(ConfigError::invalid(
                "analysis.test_fraction",
                format!("{} is outside (0, 1)", self.test_fraction),
            ));
        }
        if !self.ridge.is_finite() || self.ridge < 0.0 {
            return Err(ConfigError::invalid(
                "analysis.ridge",
                format!("{} is not a finite non-negative number", self.ridge),
            ));
        }
        Ok(())
    }
}
