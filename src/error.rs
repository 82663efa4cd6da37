use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Schedule(ScheduleError::InvalidRequest(msg)) | AppError::BadRequest(msg) => {
                warn!("rejected booking request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}
