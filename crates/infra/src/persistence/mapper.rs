use filmcat_core::{DomainError, DomainResult};
use filmcat_films::{Film, FilmDescription, FilmId, FilmReleaseYear, FilmTitle};

use super::entity::FilmRow;

/// Converts between the `Film` aggregate and its storage row.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilmPersistenceMapper;

impl FilmPersistenceMapper {
    pub fn to_row(film: &Film) -> FilmRow {
        FilmRow {
            film_id: film.id_typed().get(),
            title: film.title().as_str().to_owned(),
            description: Some(film.description().as_str().to_owned()),
            release_year: Some(film.release_year().get()),
        }
    }

    /// Rehydrate a stored row. Every column goes back through its value object.
    pub fn to_domain(row: FilmRow) -> DomainResult<Film> {
        let description = required("description", row.description)?;
        let release_year = required("release_year", row.release_year)?;

        Ok(Film::reconstruct(
            FilmId::new(row.film_id)?,
            FilmTitle::new(row.title)?,
            FilmDescription::new(description)?,
            FilmReleaseYear::new(release_year),
        ))
    }
}

fn required<T>(field: &'static str, value: Option<T>) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::invalid_argument(field, "must not be null"))
}
