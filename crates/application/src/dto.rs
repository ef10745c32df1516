use serde::{Deserialize, Serialize};

use filmcat_films::Film;

/// Flat film shape handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmDto {
    pub film_id: i64,
    pub title: String,
    pub description: String,
    pub release_year: i32,
}

impl From<&Film> for FilmDto {
    fn from(film: &Film) -> Self {
        Self {
            film_id: film.id_typed().get(),
            title: film.title().as_str().to_owned(),
            description: film.description().as_str().to_owned(),
            release_year: film.release_year().get(),
        }
    }
}

impl From<Film> for FilmDto {
    fn from(film: Film) -> Self {
        Self::from(&film)
    }
}

/// Raw input for `CreateFilmUseCase`. Validated by the use case, not here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateFilmInput {
    pub title: String,
    pub description: String,
    pub release_year: i32,
}

#[cfg(test)]
mod tests {
    use filmcat_films::{FilmDescription, FilmId, FilmReleaseYear, FilmTitle};

    use super::*;

    #[test]
    fn dto_copies_every_field() {
        let film = Film::create(
            FilmId::new(8).unwrap(),
            FilmTitle::new("Paprika").unwrap(),
            FilmDescription::new("Dream detective").unwrap(),
            FilmReleaseYear::new(2006),
        );

        assert_eq!(
            FilmDto::from(&film),
            FilmDto {
                film_id: 8,
                title: "Paprika".to_string(),
                description: "Dream detective".to_string(),
                release_year: 2006,
            }
        );
    }
}
