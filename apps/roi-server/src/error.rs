//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  Handler: Result<Json<T>, ApiError>                                    │
//! │         │                                                               │
//! │         ├── JsonRejection (malformed body) ───────────► 400            │
//! │         ├── ValidationError (missing field) ──────────► 400            │
//! │         ├── DbError::NotFound ────────────────────────► 404            │
//! │         ├── DbError::* (duplicate name included) ─────► 500            │
//! │         └── ReportError ──────────────────────────────► 500            │
//! │                                                                         │
//! │  Every failure body is { "error": "<underlying message>" }.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use roi_core::ValidationError;
use roi_db::DbError;
use roi_report::ReportError;
use serde::Serialize;

/// API error returned from handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status of the response
    pub status: StatusCode,

    /// Message sent verbatim to the caller
    pub message: String,
}

/// Wire form of an error.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 error.
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 500 error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = self.status.as_u16(), error = %self.message, "Request failed");
        }

        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

/// Converts presence-check failures to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { .. } => ApiError::not_found(err.to_string()),
            DbError::Validation(e) => e.into(),
            other => ApiError::internal(other.to_string()),
        }
    }
}

/// Converts report errors to API errors.
impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        ApiError::internal(err.to_string())
    }
}

/// Converts body parse failures to API errors.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let missing: ApiError = ValidationError::required("email").into();
        assert_eq!(missing.status, StatusCode::BAD_REQUEST);
        assert_eq!(missing.message, "email is required");

        let absent: ApiError = DbError::not_found("Scenario", "x").into();
        assert_eq!(absent.status, StatusCode::NOT_FOUND);
        assert_eq!(absent.message, "Scenario not found: x");

        let duplicate: ApiError = DbError::duplicate("name", "Q3").into();
        assert_eq!(duplicate.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(duplicate.message, "Duplicate name: 'Q3' already exists");

        let blank: ApiError = DbError::Validation(ValidationError::required("name")).into();
        assert_eq!(blank.status, StatusCode::BAD_REQUEST);

        let render: ApiError = ReportError::Render("bad font".to_string()).into();
        assert_eq!(render.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_response_body() {
        let response = ApiError::not_found("Scenario not found: x").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"error":"Scenario not found: x"}"#);
    }
}
