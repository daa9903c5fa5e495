//! Core data models for the storage-zone mock.
//!
//! `zone` holds the immutable zone configuration the router consults on every
//! request; `status` is the JSON envelope every non-GET response shares.

pub mod status;
pub mod zone;
