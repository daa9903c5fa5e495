//! src/services/storage_service.rs
//!
//! The storage contract shared by every backend, plus the one place that
//! decides which backend a zone uses. Handlers only ever see
//! `Arc<dyn StorageBackend>`.

use crate::{
    models::zone::StorageZoneConfig,
    services::{file_backend::FileBackend, memory_backend::MemoryBackend},
};
use async_trait::async_trait;
use bytes::Bytes;
use std::{io, sync::Arc};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("object `{0}` not found")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type BackendResult<T> = Result<T, BackendError>;

/// Uniform get/put/delete over an object key.
///
/// Implementations must be interchangeable: the router never asks which one
/// it is talking to.
#[async_trait]
pub trait StorageBackend: Send + Sync + 'static {
    /// Return the full object, or `NotFound`.
    async fn get(&self, key: &str) -> BackendResult<Bytes>;

    /// Store `bytes` under `key`, fully replacing any previous value.
    async fn put(&self, key: &str, bytes: Bytes) -> BackendResult<()>;

    /// Remove the object, or `NotFound` if there was nothing to remove.
    async fn delete(&self, key: &str) -> BackendResult<()>;
}

/// Pick the backend for a zone: filesystem when a root is configured,
/// process memory otherwise.
pub fn backend_for(zone: &StorageZoneConfig) -> Arc<dyn StorageBackend> {
    match &zone.storage_root {
        Some(root) => {
            info!("Using filesystem backend rooted at {}", root.display());
            Arc::new(FileBackend::new(root.clone()))
        }
        None => {
            info!("Using in-memory backend");
            Arc::new(MemoryBackend::default())
        }
    }
}
