use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::models::MacroError;
use crate::replay::PlaybackError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Macro(#[from] MacroError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            AppError::ValidationError(_) | AppError::Macro(_) => {
                (StatusCode::BAD_REQUEST, "Bad Request")
            }
            AppError::Playback(PlaybackError::AlreadyRunning) => {
                (StatusCode::CONFLICT, "Playback Running")
            }
            AppError::Playback(_) => (StatusCode::BAD_REQUEST, "Bad Request"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Error"),
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(ErrorResponse {
            error: error_message.to_string(),
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
