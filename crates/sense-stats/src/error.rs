/// Errors raised by the model fitting step.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("not enough rows to fit a model: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("normal equations are singular; set analysis.ridge above zero")]
    Singular,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}
