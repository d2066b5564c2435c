//! # API Errors
//!
//! Error types for the member API, mapped to HTTP responses. Database
//! detail is logged server-side and never leaks to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::db::StoreError;
use crate::schema::FieldErrors;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Member API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request body failed field validation
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// No member with the requested id
    #[error("member not found")]
    MemberNotFound,

    /// Delete blocked by a referencing workout session
    #[error("member still has a workout session")]
    SessionExists,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Could not establish a database connection
    #[error("database connection failed")]
    ConnectionFailed,

    /// A statement failed during execution
    #[error("database error: {0}")]
    Database(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::SessionExists => StatusCode::BAD_REQUEST,

            // 404 Not Found
            ApiError::MemberNotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            ApiError::ConnectionFailed => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Connection(_) => ApiError::ConnectionFailed,
            StoreError::Execution(e) => ApiError::Database(e.to_string()),
            StoreError::Internal(e) => ApiError::Database(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            // The raw field-error map is the body, one message list per field.
            ApiError::Validation(errors) => json!(errors),
            ApiError::MemberNotFound => json!({ "Error": "Member not found" }),
            ApiError::SessionExists => {
                json!({ "message": "Error, member workout session must be removed." })
            }
            ApiError::ConnectionFailed => json!({ "Error": "Database connection failed." }),
            ApiError::Database(cause) => {
                tracing::error!(error = %cause, "statement execution failed");
                json!({ "Error": "Internal Server Error" })
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation(FieldErrors::new()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::SessionExists.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MemberNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::ConnectionFailed.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Database("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_conversion() {
        let err = ApiError::from(StoreError::Internal("lock poisoned".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
