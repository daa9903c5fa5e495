//! The `{HttpCode, Message}` envelope returned by every JSON response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const MSG_FILE_CREATED: &str = "File created successfully";
pub const MSG_FILE_DELETED: &str = "File deleted successfully";
pub const MSG_FILE_NOT_FOUND: &str = "File not found";
pub const MSG_INVALID_ACCESS_KEY: &str = "Invalid access key";
pub const MSG_METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const MSG_STORE_FAILED: &str = "Error storing the file";

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct StatusBody {
    #[serde(rename = "HttpCode")]
    pub http_code: u16,

    #[serde(rename = "Message")]
    pub message: String,
}

impl StatusBody {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            http_code: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Build a JSON response whose `HttpCode` always matches the HTTP status line.
pub fn status_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(StatusBody::new(status, message))).into_response()
}
