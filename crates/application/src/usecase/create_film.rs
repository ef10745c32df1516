use std::sync::Arc;

use tracing::instrument;

use filmcat_films::{Film, FilmDescription, FilmReleaseYear, FilmRepository, FilmTitle};

use super::ensure_title_available;
use crate::dto::{CreateFilmInput, FilmDto};
use crate::error::ApplicationResult;

/// Registers a new film.
#[derive(Clone)]
pub struct CreateFilmUseCase {
    repository: Arc<dyn FilmRepository>,
}

impl CreateFilmUseCase {
    pub fn new(repository: Arc<dyn FilmRepository>) -> Self {
        Self { repository }
    }

    /// Validate, reserve an id, persist.
    ///
    /// Validation happens before the repository is touched, so bad input never
    /// consumes an identifier.
    #[instrument(skip(self, input), fields(title = %input.title), err)]
    pub async fn execute(&self, input: CreateFilmInput) -> ApplicationResult<FilmDto> {
        let title = FilmTitle::new(input.title)?;
        let description = FilmDescription::new(input.description)?;
        let release_year = FilmReleaseYear::new(input.release_year);

        ensure_title_available(self.repository.as_ref(), &title, None).await?;

        let id = self.repository.next_identity().await?;
        let film = Film::create(id, title, description, release_year);
        let saved = self.repository.save(&film).await?;

        tracing::info!(film_id = %saved.id_typed(), "film created");
        Ok(FilmDto::from(&saved))
    }
}
