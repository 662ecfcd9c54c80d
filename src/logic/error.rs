use thiserror::Error;

use crate::store::StoreError;

/// Outcome of a rejected repository operation.
#[derive(Error, Debug)]
pub enum RepoError {
    /// A required field is missing, blank or otherwise unusable
    #[error("{0}")]
    Validation(String),

    /// Another record already uses this name
    #[error("{0}")]
    Duplicate(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
