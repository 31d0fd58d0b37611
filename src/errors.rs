use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Body parsing error: {0}")]
    BodyParsingError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{message}")]
    UnknownCategory {
        message: String,
        available: Vec<String>,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    ModelUnavailable(String),
}

/// Helper for mapping any unknown error into internal error
pub fn internal_error<E: ToString>(err: E) -> AppError {
    AppError::InternalServerError(err.to_string())
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::ValidationError(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Choose status codes per variant
        let status = match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BodyParsingError(_) | AppError::UnknownCategory { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        // Unknown-category errors carry the list of accepted values
        let body = match &self {
            AppError::UnknownCategory { available, .. } => Json(json!({
                "message": self.to_string(),
                "available": available,
            })),
            _ => Json(json!({
                "message": self.to_string()
            })),
        };

        (status, body).into_response()
    }
}
