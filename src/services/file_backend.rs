//! Directory-rooted backend: each object key is a path relative to `root`.
//!
//! Read and delete failures are not told apart by cause; every one of them is
//! reported as `NotFound`. Only writes surface I/O errors.

use crate::services::storage_service::{BackendError, BackendResult, StorageBackend};
use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Join the key onto the root. Leading slashes are dropped so the key
    /// always stays relative to `root`; nothing else is normalized.
    fn object_path(&self, key: &str) -> PathBuf {
        self.root.join(key.trim_start_matches('/'))
    }
}

#[async_trait]
impl StorageBackend for FileBackend {
    async fn get(&self, key: &str) -> BackendResult<Bytes> {
        let path = self.object_path(key);
        match fs::read(&path).await {
            Ok(bytes) => Ok(Bytes::from(bytes)),
            Err(err) => {
                debug!("read of {} failed: {}", path.display(), err);
                Err(BackendError::NotFound(key.to_string()))
            }
        }
    }

    async fn put(&self, key: &str, bytes: Bytes) -> BackendResult<()> {
        let path = self.object_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, &bytes).await?;
        debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    async fn delete(&self, key: &str) -> BackendResult<()> {
        let path = self.object_path(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) => {
                debug!("remove of {} failed: {}", path.display(), err);
                Err(BackendError::NotFound(key.to_string()))
            }
        }
    }
}
