//! Mock CDN storage-zone server: authenticated GET/PUT/DELETE of objects
//! backed by process memory or a directory tree.

pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::Router;

pub use crate::models::zone::StorageZoneConfig;
pub use crate::state::AppState;

/// Build the application router for a zone.
pub fn app(state: AppState) -> Router {
    routes::routes::routes().with_state(state)
}
