use thiserror::Error;

use crate::kernel::RepositoryError;

/// Failures surfaced by the fruit actions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FruitError {
    /// Malformed or missing input, detected before any repository call
    #[error("{0}")]
    Validation(String),

    #[error("fruit not found")]
    NotFound,

    /// A concurrent delete won; the fruit can no longer be written as active
    #[error("{0}")]
    Conflict(String),

    /// The storage backend itself failed
    #[error("{0}")]
    Repository(String),
}

impl FruitError {
    pub fn validation(message: impl Into<String>) -> Self {
        FruitError::Validation(message.into())
    }
}

impl From<RepositoryError> for FruitError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => FruitError::NotFound,
            err @ RepositoryError::Conflict(_) => FruitError::Conflict(err.to_string()),
            RepositoryError::Backend(message) => FruitError::Repository(message),
        }
    }
}
