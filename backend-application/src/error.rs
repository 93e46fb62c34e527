use thiserror::Error;

use backend_domain::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Duplicate(key) => AppError::Conflict(key),
            StoreError::NotFound(key) => AppError::NotFound(key),
            StoreError::Backend(err) => AppError::Internal(err),
        }
    }
}
