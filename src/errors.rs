use crate::{
    models::status::{
        MSG_FILE_NOT_FOUND, MSG_INVALID_ACCESS_KEY, MSG_METHOD_NOT_ALLOWED, MSG_STORE_FAILED,
        status_response,
    },
    services::storage_service::BackendError,
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Every failure a request can end in. Each variant maps to exactly one
/// status code and message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("access denied")]
    AccessDenied,
    #[error("object `{0}` not found")]
    NotFound(String),
    #[error("method `{0}` not supported")]
    MethodNotAllowed(String),
    #[error("storing `{key}` failed: {reason}")]
    StorageFailure { key: String, reason: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::AccessDenied => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::StorageFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Internal detail stays in the logs.
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::AccessDenied => MSG_INVALID_ACCESS_KEY,
            ApiError::NotFound(_) => MSG_FILE_NOT_FOUND,
            ApiError::MethodNotAllowed(_) => MSG_METHOD_NOT_ALLOWED,
            ApiError::StorageFailure { .. } => MSG_STORE_FAILED,
        }
    }

    /// Map a failed `put`. Whatever went wrong, a write failure is a 500.
    pub fn from_put(key: &str, err: BackendError) -> Self {
        ApiError::StorageFailure {
            key: key.to_string(),
            reason: err.to_string(),
        }
    }

    /// Map a failed `get` or `delete`. Both only ever report absence.
    pub fn from_lookup(key: &str, _err: BackendError) -> Self {
        ApiError::NotFound(key.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        status_response(self.status(), self.message())
    }
}
