//! Film persistence adapters.
//!
//! Both adapters store [`FilmRow`]s and convert through [`FilmPersistenceMapper`],
//! so the in-memory backend rejects exactly what Postgres would hand back as a
//! corrupt row.

pub mod entity;
pub mod in_memory;
pub mod mapper;
pub mod postgres;

pub use entity::FilmRow;
pub use in_memory::InMemoryFilmRepository;
pub use mapper::FilmPersistenceMapper;
pub use postgres::PostgresFilmRepository;
