//! One struct per use case, each wrapping the shared repository handle.

use std::sync::Arc;

use filmcat_films::{Film, FilmId, FilmRepository, FilmTitle};

use crate::error::{ApplicationError, ApplicationResult};

pub mod create_film;
pub mod delete_film;
pub mod get_film;
pub mod list_films;
pub mod update_film;

pub use create_film::CreateFilmUseCase;
pub use delete_film::DeleteFilmUseCase;
pub use get_film::GetFilmUseCase;
pub use list_films::ListFilmsUseCase;
pub use update_film::UpdateFilmUseCase;

/// Every film use case, wired to the same repository.
#[derive(Clone)]
pub struct FilmUseCases {
    pub create: CreateFilmUseCase,
    pub get: GetFilmUseCase,
    pub list: ListFilmsUseCase,
    pub update: UpdateFilmUseCase,
    pub delete: DeleteFilmUseCase,
}

impl FilmUseCases {
    pub fn new(repository: Arc<dyn FilmRepository>) -> Self {
        Self {
            create: CreateFilmUseCase::new(repository.clone()),
            get: GetFilmUseCase::new(repository.clone()),
            list: ListFilmsUseCase::new(repository.clone()),
            update: UpdateFilmUseCase::new(repository.clone()),
            delete: DeleteFilmUseCase::new(repository),
        }
    }
}

/// Load a film by raw id or fail with `NotFound`.
///
/// Ids are never assigned below 1, so such ids are simply absent.
pub(crate) async fn require_film(
    repository: &dyn FilmRepository,
    id: i64,
) -> ApplicationResult<Film> {
    let film_id = FilmId::new(id).map_err(|_| ApplicationError::NotFound { id })?;
    repository
        .find_by_id(film_id)
        .await?
        .ok_or(ApplicationError::NotFound { id })
}

/// Fail with `Conflict` if `title` belongs to a film other than `owner`.
pub(crate) async fn ensure_title_available(
    repository: &dyn FilmRepository,
    title: &FilmTitle,
    owner: Option<FilmId>,
) -> ApplicationResult<()> {
    match repository.find_by_title(title).await? {
        Some(existing) if Some(existing.id_typed()) != owner => Err(ApplicationError::Conflict(
            format!("title '{}' is already used by film {}", title, existing.id_typed()),
        )),
        _ => Ok(()),
    }
}
