//! Defines the single catch-all route of the storage-zone API.
//!
//! ## Structure
//! - `GET    /{zone}/{*key}` — download object
//! - `PUT    /{zone}/{*key}` — upload object
//! - `DELETE /{zone}/{*key}` — delete object
//!
//! Routing is by method inside the handler rather than by axum's method
//! router, so that unauthorized requests get 403 before any method check and
//! unsupported methods get the JSON 405 body.

use crate::{handlers::object_handlers::handle_object, state::AppState};
use axum::{Router, routing::any};

/// Build the router. `/` is included so a bare root still gets the
/// access-key check and method dispatch.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", any(handle_object))
        .route("/{*path}", any(handle_object))
}
