//! # API Errors
//!
//! Error types for the HTTP API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::CatalogError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// No book exists under the requested id
    #[error("Book not found")]
    BookNotFound,

    /// A book already exists under the submitted id
    #[error("Book {0} already exists")]
    DuplicateBook(u32),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BookNotFound => StatusCode::NOT_FOUND,
            ApiError::DuplicateBook(_) => StatusCode::CONFLICT,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { .. } => ApiError::BookNotFound,
            CatalogError::DuplicateId { id } => ApiError::DuplicateBook(id),
        }
    }
}

/// Error response body.
///
/// The not-found contract fixes the shape to `{"detail": ...}`; every
/// designed error uses it.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::BookNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::DuplicateBook(1).status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_not_found_detail_is_fixed() {
        let body = ErrorResponse::from(ApiError::BookNotFound);
        assert_eq!(body.detail, "Book not found");
    }

    #[test]
    fn test_catalog_error_mapping() {
        let err = ApiError::from(CatalogError::NotFound { id: 9 });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = ApiError::from(CatalogError::DuplicateId { id: 9 });
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.to_string(), "Book 9 already exists");
    }
}
