//! HTTP-facing errors.
//!
//! # Design
//! Expected outcomes (`NotFound`, `IdMismatch`, a refused duplicate) are
//! recovered into specific statuses. Everything else reaches this type only
//! after the handler has logged it, and `IntoResponse` is the boundary that
//! picks the final response: extractor rejections keep axum's own response,
//! store faults become a bare 500.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use todo_core::{StoreError, TodoId};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("todo item with ID {0} not found")]
    NotFound(TodoId),

    #[error("path ID {path} does not match body ID {body}")]
    IdMismatch { path: TodoId, body: TodoId },

    #[error(transparent)]
    Path(#[from] PathRejection),

    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::IdMismatch { .. } => StatusCode::BAD_REQUEST,
            ApiError::Path(rejection) => rejection.status(),
            ApiError::Json(rejection) => rejection.status(),
            ApiError::Store(StoreError::DuplicateId(_)) => StatusCode::CONFLICT,
            ApiError::Store(StoreError::Poisoned) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::IdMismatch { .. } => "BAD_REQUEST",
            ApiError::Path(_) | ApiError::Json(_) => "INVALID_REQUEST",
            ApiError::Store(StoreError::DuplicateId(_)) => "CONFLICT",
            ApiError::Store(StoreError::Poisoned) => "INTERNAL_SERVER_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Path(rejection) => rejection.into_response(),
            ApiError::Json(rejection) => rejection.into_response(),
            other => {
                let status = other.status();
                // internals stay in the log line
                let message = if status.is_server_error() {
                    "internal server error".to_string()
                } else {
                    other.to_string()
                };
                let body = ErrorResponse {
                    code: other.code(),
                    message,
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
