use std::sync::Arc;

use filmcat_application::FilmUseCases;
use filmcat_films::FilmRepository;
use filmcat_infra::{InMemoryFilmRepository, PostgresFilmRepository, Settings, db};

/// Which storage engine backs the use cases.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Backend {
    InMemory,
    Postgres,
}

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::InMemory => "in_memory",
            Backend::Postgres => "postgres",
        }
    }
}

/// Everything a request handler needs.
#[derive(Clone)]
pub struct AppServices {
    pub films: FilmUseCases,
    pub backend: Backend,
}

impl AppServices {
    pub fn new(repository: Arc<dyn FilmRepository>, backend: Backend) -> Self {
        Self {
            films: FilmUseCases::new(repository),
            backend,
        }
    }

    /// Services over a fresh, empty in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryFilmRepository::new()), Backend::InMemory)
    }
}

/// Pick the backend from configuration.
///
/// Without `DATABASE_URL` the service runs on the in-memory repository, which
/// loses all data on restart.
pub async fn build_services(settings: &Settings) -> anyhow::Result<AppServices> {
    match &settings.database {
        Some(database) => {
            let pool = db::connect(database).await?;
            db::ensure_schema(&pool).await?;
            Ok(AppServices::new(
                Arc::new(PostgresFilmRepository::new(pool)),
                Backend::Postgres,
            ))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory film repository");
            Ok(AppServices::in_memory())
        }
    }
}
