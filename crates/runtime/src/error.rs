use race_core::ReduceError;

use crate::repository::RepositoryError;

/// Runtime errors
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// Config or event log could not be read
    #[error("failed to load race content: {0:#}")]
    Content(anyhow::Error),

    /// The event stream could not be reduced
    #[error(transparent)]
    Reduce(#[from] ReduceError),

    /// The results table could not be written
    #[error("failed to persist result table: {0}")]
    ResultTable(#[from] RepositoryError),

    /// Log files or the subscriber could not be set up
    #[error("failed to set up logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
