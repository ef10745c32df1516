//! Postgres pool construction and schema bootstrap.

use anyhow::Context;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::DatabaseSettings;

/// Idempotent DDL for the `film` table.
///
/// This only creates the table when it is missing; schema evolution is managed
/// outside the service.
pub const FILM_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS film (
    film_id      BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
    title        TEXT NOT NULL UNIQUE,
    description  TEXT,
    release_year INTEGER
)
"#;

/// Open a connection pool. Connections are checked out per query and returned
/// to the pool when the query future completes.
pub async fn connect(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(&settings.url)
        .await
        .context("failed to connect to Postgres")?;

    tracing::info!(
        max_connections = settings.max_connections,
        "postgres pool ready"
    );
    Ok(pool)
}

/// Create the `film` table if it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query(FILM_SCHEMA)
        .execute(pool)
        .await
        .context("failed to create film table")?;
    Ok(())
}
