//! Infrastructure layer: configuration, database access, persistence adapters.

pub mod config;
pub mod db;
pub mod persistence;

pub use config::{DatabaseSettings, Settings};
pub use persistence::{FilmPersistenceMapper, FilmRow, InMemoryFilmRepository, PostgresFilmRepository};
