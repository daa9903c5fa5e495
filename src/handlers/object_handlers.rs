//! HTTP handler for object operations.
//! Every path lands in `handle_object`, which authorizes the request, derives
//! the object key and dispatches on the method. Storage outcomes are mapped to
//! `ApiError` here and nowhere else.

use crate::{
    auth::is_authorized,
    errors::ApiError,
    models::status::{MSG_FILE_CREATED, MSG_FILE_DELETED, status_response},
    state::AppState,
};
use axum::{
    body::{self, Body},
    extract::{Request, State},
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

/// Catch-all entry point for `/{*path}`.
pub async fn handle_object(State(state): State<AppState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let key = state.zone.object_key(parts.uri.path()).to_string();

    if !is_authorized(&parts.method, &parts.headers, &state.zone) {
        warn!("rejected {} {}: invalid access key", parts.method, parts.uri.path());
        return ApiError::AccessDenied.into_response();
    }

    let result = match parts.method {
        Method::GET => get_object(&state, &key).await,
        Method::PUT => put_object(&state, &key, body).await,
        Method::DELETE => delete_object(&state, &key).await,
        other => Err(ApiError::MethodNotAllowed(other.to_string())),
    };

    result.unwrap_or_else(|err| {
        match &err {
            ApiError::StorageFailure { .. } => warn!("{}", err),
            _ => debug!("{}", err),
        }
        err.into_response()
    })
}

/// GET: raw bytes, no envelope.
async fn get_object(state: &AppState, key: &str) -> Result<Response, ApiError> {
    let bytes = state
        .storage
        .get(key)
        .await
        .map_err(|err| ApiError::from_lookup(key, err))?;
    debug!("get {} ({} bytes)", key, bytes.len());

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = StatusCode::OK;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/octet-stream"),
    );
    Ok(response)
}

/// PUT: buffer the whole body first, so an aborted upload never reaches storage.
async fn put_object(state: &AppState, key: &str, body: Body) -> Result<Response, ApiError> {
    let bytes = body::to_bytes(body, usize::MAX)
        .await
        .map_err(|err| ApiError::StorageFailure {
            key: key.to_string(),
            reason: format!("reading request body: {}", err),
        })?;
    let len = bytes.len();

    state
        .storage
        .put(key, bytes)
        .await
        .map_err(|err| ApiError::from_put(key, err))?;
    debug!("put {} ({} bytes)", key, len);

    Ok(status_response(StatusCode::CREATED, MSG_FILE_CREATED))
}

async fn delete_object(state: &AppState, key: &str) -> Result<Response, ApiError> {
    state
        .storage
        .delete(key)
        .await
        .map_err(|err| ApiError::from_lookup(key, err))?;
    debug!("deleted {}", key);

    Ok(status_response(StatusCode::OK, MSG_FILE_DELETED))
}
