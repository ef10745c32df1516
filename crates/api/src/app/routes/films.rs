use std::sync::Arc;

use axum::{
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_films).post(create_film))
        .route("/:id", get(get_film).put(update_film).delete(delete_film))
}

fn parse_film_id(raw: &str) -> Result<i64, axum::response::Response> {
    raw.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "film id must be an integer")
    })
}

// Null, missing or mistyped fields are invalid arguments, same as blank ones.
fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, axum::response::Response> {
    body.map(|Json(v)| v).map_err(|rejection| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_argument", rejection.body_text())
    })
}

pub async fn list_films(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.films.list.execute().await {
        Ok(films) => (StatusCode::OK, Json(dto::to_response_list(films))).into_response(),
        Err(e) => errors::application_error_to_response(e),
    }
}

pub async fn get_film(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_film_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.films.get.execute(id).await {
        Ok(film) => (StatusCode::OK, Json(dto::FilmResponse::from(film))).into_response(),
        Err(e) => errors::application_error_to_response(e),
    }
}

pub async fn create_film(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateFilmRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match parse_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.films.create.execute(body.into()).await {
        Ok(film) => (StatusCode::CREATED, Json(dto::FilmResponse::from(film))).into_response(),
        Err(e) => errors::application_error_to_response(e),
    }
}

pub async fn update_film(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::UpdateFilmRequest>, JsonRejection>,
) -> axum::response::Response {
    let id = match parse_film_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let body = match parse_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.films.update.execute(id, body.title).await {
        Ok(film) => (StatusCode::OK, Json(dto::FilmResponse::from(film))).into_response(),
        Err(e) => errors::application_error_to_response(e),
    }
}

pub async fn delete_film(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_film_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.films.delete.execute(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::application_error_to_response(e),
    }
}
