use filmcat_core::Entity;

use crate::vo::{FilmDescription, FilmId, FilmReleaseYear, FilmTitle};

/// Where an in-memory `Film` came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Provenance {
    /// Built by `Film::create`; no row exists in storage yet.
    New,
    /// Rebuilt from a stored row by `Film::reconstruct`.
    Rehydrated,
}

/// Aggregate root: Film.
///
/// Every field is a validated value object, so a `Film` is always fully
/// populated and valid. The only mutation exposed is [`Film::change_name`].
#[derive(Debug, Clone)]
pub struct Film {
    id: FilmId,
    title: FilmTitle,
    description: FilmDescription,
    release_year: FilmReleaseYear,
    provenance: Provenance,
}

impl Film {
    /// Build a brand-new film. `id` must come from `FilmRepository::next_identity`.
    pub fn create(
        id: FilmId,
        title: FilmTitle,
        description: FilmDescription,
        release_year: FilmReleaseYear,
    ) -> Self {
        Self {
            id,
            title,
            description,
            release_year,
            provenance: Provenance::New,
        }
    }

    /// Rebuild a film that already exists in storage.
    ///
    /// Only persistence adapters should call this.
    pub fn reconstruct(
        id: FilmId,
        title: FilmTitle,
        description: FilmDescription,
        release_year: FilmReleaseYear,
    ) -> Self {
        Self {
            id,
            title,
            description,
            release_year,
            provenance: Provenance::Rehydrated,
        }
    }

    pub fn id_typed(&self) -> FilmId {
        self.id
    }

    pub fn title(&self) -> &FilmTitle {
        &self.title
    }

    pub fn description(&self) -> &FilmDescription {
        &self.description
    }

    pub fn release_year(&self) -> FilmReleaseYear {
        self.release_year
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    /// Replace the title. Description and release year are untouched.
    pub fn change_name(&mut self, new_title: FilmTitle) {
        self.title = new_title;
    }
}

// Provenance is bookkeeping, not state: two films are equal when their fields are.
impl PartialEq for Film {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.description == other.description
            && self.release_year == other.release_year
    }
}

impl Eq for Film {}

impl Entity for Film {
    type Id = FilmId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(v: i64) -> FilmId {
        FilmId::new(v).unwrap()
    }

    fn title(s: &str) -> FilmTitle {
        FilmTitle::new(s).unwrap()
    }

    fn description(s: &str) -> FilmDescription {
        FilmDescription::new(s).unwrap()
    }

    #[test]
    fn create_returns_exactly_the_inputs() {
        let film = Film::create(
            id(1),
            title("Inception"),
            description("A thief who steals corporate secrets"),
            FilmReleaseYear::new(2010),
        );

        assert_eq!(film.id(), id(1));
        assert_eq!(film.title().as_str(), "Inception");
        assert_eq!(film.description().as_str(), "A thief who steals corporate secrets");
        assert_eq!(film.release_year().get(), 2010);
        assert_eq!(film.provenance(), Provenance::New);
    }

    #[test]
    fn reconstruct_is_tagged_as_rehydrated() {
        let film = Film::reconstruct(id(3), title("Heat"), description("Crime"), FilmReleaseYear::new(1995));
        assert_eq!(film.provenance(), Provenance::Rehydrated);
    }

    #[test]
    fn create_and_reconstruct_with_same_fields_are_equal() {
        let created = Film::create(id(3), title("Heat"), description("Crime"), FilmReleaseYear::new(1995));
        let rebuilt = Film::reconstruct(id(3), title("Heat"), description("Crime"), FilmReleaseYear::new(1995));
        assert_eq!(created, rebuilt);
    }

    #[test]
    fn change_name_only_replaces_title() {
        let mut film = Film::create(id(7), title("Alien"), description("In space"), FilmReleaseYear::new(1979));
        let before = film.clone();

        film.change_name(title("Aliens"));

        assert_eq!(film.title().as_str(), "Aliens");
        assert_eq!(film.id(), before.id());
        assert_eq!(film.description(), before.description());
        assert_eq!(film.release_year(), before.release_year());
        assert_eq!(film.provenance(), before.provenance());
        assert_ne!(film, before);
    }
}
