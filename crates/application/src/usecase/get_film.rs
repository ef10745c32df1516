use std::sync::Arc;

use tracing::instrument;

use filmcat_films::FilmRepository;

use super::require_film;
use crate::dto::FilmDto;
use crate::error::ApplicationResult;

/// Looks up one film by id.
#[derive(Clone)]
pub struct GetFilmUseCase {
    repository: Arc<dyn FilmRepository>,
}

impl GetFilmUseCase {
    pub fn new(repository: Arc<dyn FilmRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self), err)]
    pub async fn execute(&self, id: i64) -> ApplicationResult<FilmDto> {
        let film = require_film(self.repository.as_ref(), id).await?;
        Ok(FilmDto::from(&film))
    }
}
