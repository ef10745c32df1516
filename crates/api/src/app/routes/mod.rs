use axum::Router;

pub mod films;
pub mod system;

/// Router for every `/api` endpoint.
pub fn router() -> Router {
    Router::new().nest("/films", films::router())
}
