//! HTTP error mapping for core errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use stakeboard_core::errors::{DatabaseError, Error};

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors leaving the HTTP layer.
#[derive(Debug)]
pub enum ApiError {
    /// A core error, mapped onto a status code by taxonomy.
    Core(Error),
    /// Missing or invalid credentials.
    Unauthorized(String),
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Core(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message.clone()),
            ApiError::Core(Error::Validation(e)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            ApiError::Core(Error::Access(e)) => (StatusCode::FORBIDDEN, e.to_string()),
            ApiError::Core(Error::Database(DatabaseError::NotFound(e))) => {
                (StatusCode::NOT_FOUND, e.to_string())
            }
            ApiError::Core(Error::Database(DatabaseError::UniqueViolation(_)))
            | ApiError::Core(Error::ConstraintViolation(_)) => {
                (StatusCode::CONFLICT, "Already exists".to_string())
            }
            ApiError::Core(other) => {
                tracing::error!("Internal error serving request: {}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
