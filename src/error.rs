use thiserror::Error;

/// Errors surfaced by series projection and snapshot extraction. Data
/// generation itself is total and has no error cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("unknown metric property: {0}")]
    InvalidProperty(String),

    #[error("dataset is empty, there is no final day to snapshot")]
    EmptyDataset,
}

pub type Result<T> = std::result::Result<T, ChartError>;
