//! Access-key authorization.
//!
//! A request is allowed when it carries the zone's access key in the
//! `AccessKey` header, or when it is a GET against a public-read zone.

use crate::models::zone::StorageZoneConfig;
use axum::http::{HeaderMap, Method};

/// Header carrying the shared secret. `HeaderMap` lookups are case-insensitive.
pub const ACCESS_KEY_HEADER: &str = "accesskey";

pub fn is_authorized(method: &Method, headers: &HeaderMap, zone: &StorageZoneConfig) -> bool {
    if zone.public_read && method == Method::GET {
        return true;
    }

    match headers.get(ACCESS_KEY_HEADER) {
        Some(value) => value.as_bytes() == zone.access_key.as_bytes(),
        None => false,
    }
}
