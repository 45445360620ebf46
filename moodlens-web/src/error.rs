//! Error types for moodlens-web
//!
//! Every handler failure is reported once to the caller; nothing is retried.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// moodlens-common error (scoring provider, database, IO)
    #[error(transparent)]
    Common(#[from] moodlens_common::Error),

    /// Generic error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Common(moodlens_common::Error::Database(err))
    }
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        use moodlens_common::Error as CommonError;

        match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal(_) | ApiError::Other(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
            ApiError::Common(err) => match err {
                CommonError::Polarity(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "SENTIMENT_PROVIDER_ERROR")
                }
                CommonError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
                CommonError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                CommonError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
                CommonError::Io(_) | CommonError::Config(_) | CommonError::Internal(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();
        let message = self.to_string();

        if status.is_server_error() {
            error!("{} {}: {}", status.as_u16(), error_code, message);
        }

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use moodlens_common::scoring::PolarityError;

    #[test]
    fn test_provider_failure_is_server_error() {
        let err = ApiError::from(moodlens_common::Error::from(PolarityError::Unavailable(
            "down".to_string(),
        )));
        assert_eq!(
            err.status_and_code(),
            (StatusCode::INTERNAL_SERVER_ERROR, "SENTIMENT_PROVIDER_ERROR")
        );
    }

    #[test]
    fn test_not_found_status() {
        let response = ApiError::NotFound("result 9".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_code() {
        let err = ApiError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status_and_code().1, "DATABASE_ERROR");
    }
}
