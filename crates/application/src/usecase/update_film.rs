use std::sync::Arc;

use tracing::instrument;

use filmcat_films::{FilmRepository, FilmTitle};

use super::{ensure_title_available, require_film};
use crate::dto::FilmDto;
use crate::error::ApplicationResult;

/// Renames a film. No other field can be changed here.
#[derive(Clone)]
pub struct UpdateFilmUseCase {
    repository: Arc<dyn FilmRepository>,
}

impl UpdateFilmUseCase {
    pub fn new(repository: Arc<dyn FilmRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, new_title), err)]
    pub async fn execute(&self, id: i64, new_title: String) -> ApplicationResult<FilmDto> {
        let new_title = FilmTitle::new(new_title)?;
        let mut film = require_film(self.repository.as_ref(), id).await?;

        ensure_title_available(self.repository.as_ref(), &new_title, Some(film.id_typed())).await?;

        film.change_name(new_title);
        let updated = self.repository.save(&film).await?;

        tracing::info!(film_id = id, "film renamed");
        Ok(FilmDto::from(&updated))
    }
}
