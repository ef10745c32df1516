use std::sync::Arc;

use tracing::instrument;

use filmcat_films::FilmRepository;

use crate::dto::FilmDto;
use crate::error::ApplicationResult;

/// Returns the whole catalog.
#[derive(Clone)]
pub struct ListFilmsUseCase {
    repository: Arc<dyn FilmRepository>,
}

impl ListFilmsUseCase {
    pub fn new(repository: Arc<dyn FilmRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self), err)]
    pub async fn execute(&self) -> ApplicationResult<Vec<FilmDto>> {
        let films = self.repository.find_all().await?;
        tracing::debug!(count = films.len(), "films listed");
        Ok(films.iter().map(FilmDto::from).collect())
    }
}
