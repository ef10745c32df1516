//! Films domain module.
//!
//! This crate contains the film catalog's business rules: self-validating value
//! objects, the `Film` aggregate and the repository port it is persisted
//! through. It performs no IO itself.

pub mod film;
pub mod repository;
pub mod vo;

pub use film::{Film, Provenance};
pub use repository::{FilmRepository, RepositoryError};
pub use vo::{FilmDescription, FilmId, FilmReleaseYear, FilmTitle};
