use serde::{Deserialize, Serialize};

/// Summary statistics for one group of scored games.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregateRow {
    pub key: String,
    pub count: usize,
    pub mean_polarity: f64,
    pub mean_subjectivity: f64,
    /// Mean of the success proxy over members that have one.
    pub mean_success: Option<f64>,
    /// Pearson correlation between polarity and the success proxy within the group.
    pub correlation: Option<f64>,
}
