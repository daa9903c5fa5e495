use crate::{
    models::zone::StorageZoneConfig,
    services::storage_service::{StorageBackend, backend_for},
};
use std::sync::Arc;

/// Shared state handed to every handler. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub zone: Arc<StorageZoneConfig>,
    pub storage: Arc<dyn StorageBackend>,
}

impl AppState {
    /// Build state for a zone, selecting its backend once.
    pub fn new(zone: StorageZoneConfig) -> Self {
        let storage = backend_for(&zone);
        Self::with_backend(zone, storage)
    }

    pub fn with_backend(zone: StorageZoneConfig, storage: Arc<dyn StorageBackend>) -> Self {
        Self {
            zone: Arc::new(zone),
            storage,
        }
    }
}
