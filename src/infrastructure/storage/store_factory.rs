use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{ResultStore, ResultStoreError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::local_store::LocalResultStore;
use super::memory_store::InMemoryResultStore;

pub struct ResultStoreFactory;

impl ResultStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn ResultStore>, ResultStoreError> {
        let ttl = settings.ttl();
        match settings.provider {
            StorageProviderSetting::Memory => {
                let max_entries = (settings.max_entries > 0).then_some(settings.max_entries);
                tracing::info!(
                    ttl_secs = settings.ttl_seconds,
                    max_entries = settings.max_entries,
                    "Using in-memory result store"
                );
                Ok(Arc::new(InMemoryResultStore::new(ttl, max_entries)))
            }
            StorageProviderSetting::Local => {
                if settings.local_path.trim().is_empty() {
                    return Err(ResultStoreError::InvalidConfig(
                        "storage.local_path required for the local provider".into(),
                    ));
                }
                tracing::info!(
                    path = %settings.local_path,
                    ttl_secs = settings.ttl_seconds,
                    "Using local filesystem result store"
                );
                let store = LocalResultStore::new(PathBuf::from(&settings.local_path), ttl)?;
                Ok(Arc::new(store))
            }
        }
    }
}
