//! Postgres-backed film repository.
//!
//! ## Error Mapping
//!
//! | SQLx Error | PostgreSQL Error Code | RepositoryError | Scenario |
//! |------------|----------------------|-----------------|----------|
//! | Database (unique violation) | `23505` | `Conflict` | Another row already uses the title |
//! | Database (other) | Any other | `Storage` | Constraint or query failure |
//! | PoolClosed / PoolTimedOut | N/A | `Storage` | Pool shut down or exhausted |
//! | Other | N/A | `Storage` | Network errors, decode errors, etc. |
//!
//! Rows that decode but fail domain validation surface as `Corrupt`.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use filmcat_films::{Film, FilmId, FilmRepository, FilmTitle, RepositoryError};

use super::entity::FilmRow;
use super::mapper::FilmPersistenceMapper;

/// Film repository over the `film` table.
///
/// `PgPool` is `Send + Sync`; every call checks out a connection for the
/// duration of a single statement. Atomicity and isolation are Postgres's.
#[derive(Debug, Clone)]
pub struct PostgresFilmRepository {
    pool: Arc<PgPool>,
}

impl PostgresFilmRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

#[async_trait]
impl FilmRepository for PostgresFilmRepository {
    #[instrument(skip(self, film), fields(film_id = %film.id_typed()), err)]
    async fn save(&self, film: &Film) -> Result<Film, RepositoryError> {
        let row = FilmPersistenceMapper::to_row(film);

        let stored = sqlx::query(
            r#"
            INSERT INTO film (
                film_id,
                title,
                description,
                release_year
            )
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (film_id)
            DO UPDATE SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                release_year = EXCLUDED.release_year
            RETURNING film_id, title, description, release_year
            "#,
        )
        .bind(row.film_id)
        .bind(&row.title)
        .bind(&row.description)
        .bind(row.release_year)
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("save", e))?;

        decode(stored)
    }

    #[instrument(skip(self, film), fields(film_id = %film.id_typed()), err)]
    async fn delete(&self, film: &Film) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM film WHERE film_id = $1")
            .bind(film.id_typed().get())
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete", e))?;

        if result.rows_affected() == 0 {
            tracing::debug!("delete matched no row");
        }
        Ok(())
    }

    #[instrument(skip(self), fields(film_id = %id), err)]
    async fn find_by_id(&self, id: FilmId) -> Result<Option<Film>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT film_id, title, description, release_year
            FROM film
            WHERE film_id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_by_id", e))?;

        row.map(decode).transpose()
    }

    #[instrument(skip(self, title), err)]
    async fn find_by_title(&self, title: &FilmTitle) -> Result<Option<Film>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT film_id, title, description, release_year
            FROM film
            WHERE title = $1
            "#,
        )
        .bind(title.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_by_title", e))?;

        row.map(decode).transpose()
    }

    #[instrument(skip(self), err)]
    async fn find_all(&self) -> Result<Vec<Film>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT film_id, title, description, release_year
            FROM film
            ORDER BY film_id ASC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_all", e))?;

        let mut films = Vec::with_capacity(rows.len());
        for row in rows {
            films.push(decode(row)?);
        }
        Ok(films)
    }

    #[instrument(skip(self), err)]
    async fn next_identity(&self) -> Result<FilmId, RepositoryError> {
        // Sequence values are handed out once, even across concurrent transactions.
        let (next,): (i64,) =
            sqlx::query_as("SELECT nextval(pg_get_serial_sequence('film', 'film_id'))")
                .fetch_one(&*self.pool)
                .await
                .map_err(|e| map_sqlx_error("next_identity", e))?;

        Ok(FilmId::new(next)?)
    }
}

fn decode(row: sqlx::postgres::PgRow) -> Result<Film, RepositoryError> {
    let row = FilmRow::from_row(&row)
        .map_err(|e| RepositoryError::Storage(format!("failed to decode film row: {e}")))?;
    Ok(FilmPersistenceMapper::to_domain(row)?)
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Database(db_err) => {
            let msg = format!("database error in {}: {}", operation, db_err.message());
            match db_err.code() {
                Some(code) if code.as_ref() == "23505" => RepositoryError::Conflict(msg),
                _ => RepositoryError::Storage(msg),
            }
        }
        sqlx::Error::PoolClosed => {
            RepositoryError::Storage(format!("connection pool closed in {}", operation))
        }
        sqlx::Error::PoolTimedOut => {
            RepositoryError::Storage(format!("timed out acquiring a connection in {}", operation))
        }
        _ => RepositoryError::Storage(format!("sqlx error in {}: {}", operation, err)),
    }
}
