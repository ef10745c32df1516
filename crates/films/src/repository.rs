//! Persistence port for the `Film` aggregate.

use async_trait::async_trait;
use thiserror::Error;

use filmcat_core::DomainError;

use crate::film::Film;
use crate::vo::{FilmId, FilmTitle};

/// Repository operation error.
///
/// These are **infrastructure errors** surfaced through the port, as opposed to
/// the validation errors raised by value objects.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The storage engine rejected a write because of a uniqueness constraint.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Connectivity, pool or query failure.
    #[error("storage failure: {0}")]
    Storage(String),

    /// A stored row no longer satisfies the domain's validation rules.
    #[error("corrupt row: {0}")]
    Corrupt(#[from] DomainError),
}

/// Persistence contract consumed by the use cases.
///
/// Lookups return `Ok(None)` for missing rows; absence is never an error here.
#[async_trait]
pub trait FilmRepository: Send + Sync {
    /// Insert or update the film's row and return what was persisted.
    async fn save(&self, film: &Film) -> Result<Film, RepositoryError>;

    /// Remove the film's row. Removing a row that does not exist is a no-op.
    async fn delete(&self, film: &Film) -> Result<(), RepositoryError>;

    async fn find_by_id(&self, id: FilmId) -> Result<Option<Film>, RepositoryError>;

    async fn find_by_title(&self, title: &FilmTitle) -> Result<Option<Film>, RepositoryError>;

    /// All films, ordered by id.
    async fn find_all(&self) -> Result<Vec<Film>, RepositoryError>;

    /// Reserve a fresh identifier. Concurrent callers never receive the same id.
    async fn next_identity(&self) -> Result<FilmId, RepositoryError>;
}

#[async_trait]
impl<R> FilmRepository for std::sync::Arc<R>
where
    R: FilmRepository + ?Sized,
{
    async fn save(&self, film: &Film) -> Result<Film, RepositoryError> {
        (**self).save(film).await
    }

    async fn delete(&self, film: &Film) -> Result<(), RepositoryError> {
        (**self).delete(film).await
    }

    async fn find_by_id(&self, id: FilmId) -> Result<Option<Film>, RepositoryError> {
        (**self).find_by_id(id).await
    }

    async fn find_by_title(&self, title: &FilmTitle) -> Result<Option<Film>, RepositoryError> {
        (**self).find_by_title(title).await
    }

    async fn find_all(&self) -> Result<Vec<Film>, RepositoryError> {
        (**self).find_all().await
    }

    async fn next_identity(&self) -> Result<FilmId, RepositoryError> {
        (**self).next_identity().await
    }
}
