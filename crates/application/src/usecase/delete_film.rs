use std::sync::Arc;

use tracing::instrument;

use filmcat_films::FilmRepository;

use super::require_film;
use crate::error::ApplicationResult;

/// Removes a film from the catalog.
#[derive(Clone)]
pub struct DeleteFilmUseCase {
    repository: Arc<dyn FilmRepository>,
}

impl DeleteFilmUseCase {
    pub fn new(repository: Arc<dyn FilmRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self), err)]
    pub async fn execute(&self, id: i64) -> ApplicationResult<()> {
        let film = require_film(self.repository.as_ref(), id).await?;
        self.repository.delete(&film).await?;
        tracing::info!(film_id = id, "film deleted");
        Ok(())
    }
}
