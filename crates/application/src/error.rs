use thiserror::Error;

use filmcat_core::DomainError;
use filmcat_films::RepositoryError;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Use-case failure, classified so the boundary can pick a response.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Input rejected by a value object; raised before any storage call.
    #[error(transparent)]
    InvalidArgument(#[from] DomainError),

    #[error("film not found with id: {id}")]
    NotFound { id: i64 },

    /// The title is already taken by another film.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Anything the storage layer could not do, passed through unchanged.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict(msg) => Self::Conflict(msg),
            RepositoryError::Storage(msg) => Self::Storage(msg),
            RepositoryError::Corrupt(e) => Self::Storage(format!("corrupt film row: {e}")),
        }
    }
}
