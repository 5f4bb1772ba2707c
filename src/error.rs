//! Error types for community-service.
//!
//! Errors are converted to JSON HTTP responses for API clients. The safety
//! rejection is a dedicated variant so that blocked submissions are
//! distinguishable from ordinary validation failures while never exposing
//! which terms triggered the block.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for community-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// User-facing message returned when the safety evaluator blocks a submission.
pub const UNSAFE_CONTENT_MESSAGE: &str = "Content appears unsafe. Please rephrase.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Content submission rejected by the safety evaluator.
    #[error("{}", UNSAFE_CONTENT_MESSAGE)]
    UnsafeContent,

    #[error("Not authenticated")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("{0} not found")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),

    /// Feature disabled because its backing service is not configured.
    #[error("{0}")]
    NotConfigured(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::UnsafeContent
            | AppError::InvalidTransition(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        // Internal detail stays in the server log; the client gets a
        // generic message.
        let message = match self {
            AppError::Database(detail) | AppError::Internal(detail) => {
                tracing::error!(error = %detail, "internal error");
                "Something went wrong".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(status).json(serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        }))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safety_rejection_is_bad_request_with_fixed_message() {
        let err = AppError::UnsafeContent;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), UNSAFE_CONTENT_MESSAGE);
    }

    #[test]
    fn test_internal_detail_not_leaked() {
        let err = AppError::Database("connection refused to 10.0.0.5".into());
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
