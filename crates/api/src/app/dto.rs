use serde::{Deserialize, Serialize};

use filmcat_application::{CreateFilmInput, FilmDto};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFilmRequest {
    pub title: String,
    pub description: String,
    pub release_year: i32,
}

impl From<CreateFilmRequest> for CreateFilmInput {
    fn from(req: CreateFilmRequest) -> Self {
        CreateFilmInput {
            title: req.title,
            description: req.description,
            release_year: req.release_year,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateFilmRequest {
    pub title: String,
}

// -------------------------
// Response DTOs
// -------------------------

/// Wire shape of a film; field-for-field copy of [`FilmDto`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmResponse {
    pub film_id: i64,
    pub title: String,
    pub description: String,
    pub release_year: i32,
}

impl From<FilmDto> for FilmResponse {
    fn from(dto: FilmDto) -> Self {
        FilmResponse {
            film_id: dto.film_id,
            title: dto.title,
            description: dto.description,
            release_year: dto.release_year,
        }
    }
}

pub fn to_response_list(dtos: Vec<FilmDto>) -> Vec<FilmResponse> {
    dtos.into_iter().map(FilmResponse::from).collect()
}
