use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use filmcat_application::ApplicationError;

pub fn application_error_to_response(err: ApplicationError) -> axum::response::Response {
    match err {
        ApplicationError::InvalidArgument(e) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_argument", e.to_string())
        }
        ApplicationError::NotFound { id } => json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("film not found with id: {id}"),
        ),
        ApplicationError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
        ApplicationError::Storage(msg) => {
            tracing::error!(error = %msg, "storage failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "storage_failure", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
