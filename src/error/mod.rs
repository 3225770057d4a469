//! Error handling for the Elixhauser score calculator.

use arrow::error::ArrowError;

/// Specialized error type for comorbidity scoring operations
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// Required comorbidity columns are missing or misnamed, or the dataset is empty
    #[error("Schema error: {0}")]
    SchemaError(String),

    /// An argument outside the supported set was supplied
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An indicator value other than 0 or 1 was found
    #[error("Domain error: {0}")]
    DomainError(String),

    /// Arrow error
    #[error("Arrow error: {0}")]
    ArrowError(#[from] ArrowError),
}

/// Result type for scoring operations
pub type Result<T> = std::result::Result<T, ScoreError>;
