//! Application layer: film use cases and the DTOs they exchange.
//!
//! Use cases orchestrate the domain and the repository port. They hold no
//! state of their own, never retry, and hand every failure straight back to
//! the caller as an [`ApplicationError`].

pub mod dto;
pub mod error;
pub mod usecase;

pub use dto::{CreateFilmInput, FilmDto};
pub use error::{ApplicationError, ApplicationResult};
pub use usecase::{
    CreateFilmUseCase, DeleteFilmUseCase, FilmUseCases, GetFilmUseCase, ListFilmsUseCase,
    UpdateFilmUseCase,
};
