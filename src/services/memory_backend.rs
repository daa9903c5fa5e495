//! Process-lifetime object map. Unbounded; nothing is ever evicted.

use crate::services::storage_service::{BackendError, BackendResult, StorageBackend};
use async_trait::async_trait;
use bytes::Bytes;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Clone, Default)]
pub struct MemoryBackend {
    objects: Arc<RwLock<HashMap<String, Bytes>>>,
}

#[cfg(test)]
impl MemoryBackend {
    async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn get(&self, key: &str) -> BackendResult<Bytes> {
        let guard = self.objects.read().await;
        guard
            .get(key)
            .cloned()
            .ok_or_else(|| BackendError::NotFound(key.to_string()))
    }

    async fn put(&self, key: &str, bytes: Bytes) -> BackendResult<()> {
        let mut guard = self.objects.write().await;
        debug!("memory put {} ({} bytes)", key, bytes.len());
        guard.insert(key.to_string(), bytes);
        Ok(())
    }

    async fn delete(&self, key: &str) -> BackendResult<()> {
        let mut guard = self.objects.write().await;
        match guard.remove(key) {
            Some(_) => Ok(()),
            None => Err(BackendError::NotFound(key.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_get_delete() {
        let backend = MemoryBackend::default();
        backend.put("logs/1", Bytes::from_static(b"abc")).await.unwrap();
        assert_eq!(backend.get("logs/1").await.unwrap(), Bytes::from_static(b"abc"));

        backend.delete("logs/1").await.unwrap();
        assert!(matches!(
            backend.get("logs/1").await,
            Err(BackendError::NotFound(_))
        ));
        assert!(backend.is_empty().await);
    }

    #[tokio::test]
    async fn put_replaces_previous_value() {
        let backend = MemoryBackend::default();
        backend.put("k", Bytes::from_static(b"first, longer")).await.unwrap();
        backend.put("k", Bytes::from_static(b"second")).await.unwrap();
        assert_eq!(backend.get("k").await.unwrap(), Bytes::from_static(b"second"));
        assert_eq!(backend.len().await, 1);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let backend = MemoryBackend::default();
        assert!(matches!(
            backend.delete("missing").await,
            Err(BackendError::NotFound(key)) if key == "missing"
        ));
    }

    #[tokio::test]
    async fn clones_share_the_same_map() {
        let backend = MemoryBackend::default();
        let other = backend.clone();
        other.put("shared", Bytes::from_static(b"x")).await.unwrap();
        assert_eq!(backend.get("shared").await.unwrap(), Bytes::from_static(b"x"));
    }

    #[tokio::test]
    async fn keys_are_case_sensitive() {
        let backend = MemoryBackend::default();
        backend.put("File.txt", Bytes::from_static(b"x")).await.unwrap();
        assert!(backend.get("file.txt").await.is_err());
    }
}
