use sqlx::Row;

/// One row of the `film` table.
///
/// Nullable columns stay `Option` here; the mapper decides what is acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmRow {
    pub film_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for FilmRow {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        Ok(FilmRow {
            film_id: row.try_get("film_id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            release_year: row.try_get("release_year")?,
        })
    }
}
