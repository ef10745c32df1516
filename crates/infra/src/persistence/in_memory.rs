use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use filmcat_films::{Film, FilmId, FilmRepository, FilmTitle, RepositoryError};

use super::entity::FilmRow;
use super::mapper::FilmPersistenceMapper;

/// In-memory film repository.
///
/// Intended for tests/dev. Mirrors the Postgres table: rows keyed by id, unique
/// titles, ids drawn from a monotonically increasing counter.
#[derive(Debug)]
pub struct InMemoryFilmRepository {
    rows: RwLock<BTreeMap<i64, FilmRow>>,
    next_id: AtomicI64,
}

impl InMemoryFilmRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Insert a raw row, bypassing the mapper. Lets tests plant corrupt data.
    pub fn insert_row(&self, row: FilmRow) -> Result<(), RepositoryError> {
        let mut rows = self.write()?;
        self.next_id.fetch_max(row.film_id.saturating_add(1), Ordering::SeqCst);
        rows.insert(row.film_id, row);
        Ok(())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, BTreeMap<i64, FilmRow>>, RepositoryError> {
        self.rows
            .read()
            .map_err(|_| RepositoryError::Storage("lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, BTreeMap<i64, FilmRow>>, RepositoryError> {
        self.rows
            .write()
            .map_err(|_| RepositoryError::Storage("lock poisoned".to_string()))
    }
}

impl Default for InMemoryFilmRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FilmRepository for InMemoryFilmRepository {
    async fn save(&self, film: &Film) -> Result<Film, RepositoryError> {
        let row = FilmPersistenceMapper::to_row(film);
        let mut rows = self.write()?;

        // Same guarantee as the UNIQUE constraint on film.title.
        if let Some(other) = rows
            .values()
            .find(|r| r.title == row.title && r.film_id != row.film_id)
        {
            return Err(RepositoryError::Conflict(format!(
                "title '{}' already used by film {}",
                row.title, other.film_id
            )));
        }

        self.next_id.fetch_max(row.film_id.saturating_add(1), Ordering::SeqCst);
        rows.insert(row.film_id, row.clone());
        Ok(FilmPersistenceMapper::to_domain(row)?)
    }

    async fn delete(&self, film: &Film) -> Result<(), RepositoryError> {
        self.write()?.remove(&film.id_typed().get());
        Ok(())
    }

    async fn find_by_id(&self, id: FilmId) -> Result<Option<Film>, RepositoryError> {
        let row = self.read()?.get(&id.get()).cloned();
        Ok(row.map(FilmPersistenceMapper::to_domain).transpose()?)
    }

    async fn find_by_title(&self, title: &FilmTitle) -> Result<Option<Film>, RepositoryError> {
        let row = self
            .read()?
            .values()
            .find(|r| r.title == title.as_str())
            .cloned();
        Ok(row.map(FilmPersistenceMapper::to_domain).transpose()?)
    }

    async fn find_all(&self) -> Result<Vec<Film>, RepositoryError> {
        let rows: Vec<FilmRow> = self.read()?.values().cloned().collect();
        let mut films = Vec::with_capacity(rows.len());
        for row in rows {
            films.push(FilmPersistenceMapper::to_domain(row)?);
        }
        Ok(films)
    }

    async fn next_identity(&self) -> Result<FilmId, RepositoryError> {
        let next = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(FilmId::new(next)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use filmcat_films::{FilmDescription, FilmReleaseYear};

    use super::*;

    fn film(id: FilmId, title: &str) -> Film {
        Film::create(
            id,
            FilmTitle::new(title).unwrap(),
            FilmDescription::new("A description").unwrap(),
            FilmReleaseYear::new(2010),
        )
    }

    #[tokio::test]
    async fn save_then_find_by_id_round_trips() {
        let repo = InMemoryFilmRepository::new();
        let id = repo.next_identity().await.unwrap();
        let original = film(id, "Inception");

        let saved = repo.save(&original).await.unwrap();
        let found = repo.find_by_id(saved.id_typed()).await.unwrap().unwrap();

        assert_eq!(found, original);
        assert_eq!(found, saved);
    }

    #[tokio::test]
    async fn find_by_id_on_missing_row_is_none() {
        let repo = InMemoryFilmRepository::new();
        let missing = FilmId::new(404).unwrap();
        assert!(repo.find_by_id(missing).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_title_matches_exact_title() {
        let repo = InMemoryFilmRepository::new();
        let id = repo.next_identity().await.unwrap();
        repo.save(&film(id, "Heat")).await.unwrap();

        let hit = repo.find_by_title(&FilmTitle::new("Heat").unwrap()).await.unwrap();
        assert_eq!(hit.map(|f| f.id_typed()), Some(id));

        let miss = repo.find_by_title(&FilmTitle::new("heat").unwrap()).await.unwrap();
        assert!(miss.is_none());
    }

    #[tokio::test]
    async fn save_upserts_existing_row() {
        let repo = InMemoryFilmRepository::new();
        let id = repo.next_identity().await.unwrap();
        let mut f = film(id, "Alien");
        repo.save(&f).await.unwrap();

        f.change_name(FilmTitle::new("Aliens").unwrap());
        repo.save(&f).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title().as_str(), "Aliens");
    }

    #[tokio::test]
    async fn duplicate_title_is_a_conflict() {
        let repo = InMemoryFilmRepository::new();
        let a = repo.next_identity().await.unwrap();
        let b = repo.next_identity().await.unwrap();
        repo.save(&film(a, "Heat")).await.unwrap();

        let err = repo.save(&film(b, "Heat")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    async fn delete_removes_row_and_tolerates_absence() {
        let repo = InMemoryFilmRepository::new();
        let id = repo.next_identity().await.unwrap();
        let f = film(id, "Arrival");
        repo.save(&f).await.unwrap();

        repo.delete(&f).await.unwrap();
        assert!(repo.find_by_id(id).await.unwrap().is_none());

        repo.delete(&f).await.unwrap();
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_id() {
        let repo = InMemoryFilmRepository::new();
        for title in ["C", "A", "B"] {
            let id = repo.next_identity().await.unwrap();
            repo.save(&film(id, title)).await.unwrap();
        }

        let ids: Vec<i64> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|f| f.id_typed().get())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn corrupt_rows_surface_as_corrupt() {
        let repo = InMemoryFilmRepository::new();
        repo.insert_row(FilmRow {
            film_id: 5,
            title: "Broken".to_string(),
            description: None,
            release_year: Some(1999),
        })
        .unwrap();

        let err = repo.find_by_id(FilmId::new(5).unwrap()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Corrupt(_)));

        // Ids planted by hand are never handed out again.
        assert_eq!(repo.next_identity().await.unwrap().get(), 6);
    }

    #[tokio::test]
    async fn largest_id_is_stored_without_overflow() {
        let repo = InMemoryFilmRepository::new();
        let id = FilmId::new(i64::MAX).unwrap();

        repo.save(&film(id, "Last")).await.unwrap();

        let found = repo.find_by_id(id).await.unwrap().expect("stored row");
        assert_eq!(found.id_typed(), id);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_next_identity_never_collides() {
        let repo = Arc::new(InMemoryFilmRepository::new());

        let mut handles = Vec::new();
        for _ in 0..256 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move { repo.next_identity().await.unwrap() }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            assert!(seen.insert(handle.await.unwrap()));
        }
        assert_eq!(seen.len(), 256);
    }
}
