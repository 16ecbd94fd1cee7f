use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectMeta, ObjectStore, PutPayload};

use crate::application::ports::{ResultStore, ResultStoreError};
use crate::domain::{AudioFormat, OutputFilename, ProcessedResult, ResultId, StoragePath};

const MAX_ID_ATTEMPTS: usize = 8;

/// Keeps each result as `{base_path}/{result_id}/{filename}`.
///
/// Expiry is judged from the file's modification time, so results written
/// before a restart stay reachable until their TTL runs out.
pub struct LocalResultStore {
    inner: Arc<LocalFileSystem>,
    ttl: Option<Duration>,
}

impl LocalResultStore {
    pub fn new(base_path: PathBuf, ttl: Option<Duration>) -> Result<Self, ResultStoreError> {
        std::fs::create_dir_all(&base_path).map_err(ResultStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| ResultStoreError::InvalidConfig(e.to_string()))?
            .with_automatic_cleanup(true);
        Ok(Self {
            inner: Arc::new(fs),
            ttl,
        })
    }

    fn is_expired(&self, last_modified: DateTime<Utc>) -> bool {
        let Some(ttl) = self.ttl else {
            return false;
        };
        let age = Utc::now().signed_duration_since(last_modified);
        match chrono::Duration::from_std(ttl) {
            Ok(ttl) => age >= ttl,
            Err(_) => false,
        }
    }

    async fn objects_under(&self, id: &ResultId) -> Result<Vec<ObjectMeta>, ResultStoreError> {
        let prefix = StorePath::from(StoragePath::prefix(id).as_str());
        self.inner
            .list(Some(&prefix))
            .try_collect::<Vec<_>>()
            .await
            .map_err(|e| ResultStoreError::FetchFailed(e.to_string()))
    }
}

#[async_trait::async_trait]
impl ResultStore for LocalResultStore {
    async fn store(&self, result: ProcessedResult) -> Result<ResultId, ResultStoreError> {
        let mut id = ResultId::new();
        let mut attempts = 1;
        while !self.objects_under(&id).await?.is_empty() {
            if attempts == MAX_ID_ATTEMPTS {
                return Err(ResultStoreError::StoreFailed(
                    "could not allocate an unused result id".to_string(),
                ));
            }
            id = ResultId::new();
            attempts += 1;
        }

        let path = StoragePath::new(&id, &result.filename);
        let store_path = StorePath::from(path.as_str());
        self.inner
            .put(&store_path, PutPayload::from(result.data))
            .await
            .map_err(|e| ResultStoreError::StoreFailed(e.to_string()))?;

        tracing::debug!(path = %path, "Result written to local store");

        Ok(id)
    }

    async fn fetch(&self, id: &ResultId) -> Result<Option<ProcessedResult>, ResultStoreError> {
        let Some(meta) = self.objects_under(id).await?.into_iter().next() else {
            return Ok(None);
        };

        if self.is_expired(meta.last_modified) {
            tracing::debug!(result_id = %id, "Stored result expired");
            return Ok(None);
        }

        let Some(filename) = meta
            .location
            .filename()
            .and_then(OutputFilename::from_stored)
        else {
            tracing::warn!(
                location = %meta.location,
                "Ignoring stored object with unexpected name"
            );
            return Ok(None);
        };

        let data = match self.inner.get(&meta.location).await {
            Ok(result) => result
                .bytes()
                .await
                .map_err(|e| ResultStoreError::FetchFailed(e.to_string()))?,
            Err(object_store::Error::NotFound { .. }) => return Ok(None),
            Err(e) => return Err(ResultStoreError::FetchFailed(e.to_string())),
        };

        let format = AudioFormat::from_filename(filename.as_str()).unwrap_or(AudioFormat::Wav);

        Ok(Some(ProcessedResult::new(data, filename, format)))
    }

    async fn purge_expired(&self) -> Result<usize, ResultStoreError> {
        if self.ttl.is_none() {
            return Ok(0);
        }

        let objects: Vec<ObjectMeta> = self
            .inner
            .list(None)
            .try_collect::<Vec<_>>()
            .await
            .map_err(|e| ResultStoreError::PurgeFailed(e.to_string()))?;

        let mut removed = 0;
        for meta in objects {
            if !self.is_expired(meta.last_modified) {
                continue;
            }
            match self.inner.delete(&meta.location).await {
                Ok(()) | Err(object_store::Error::NotFound { .. }) => removed += 1,
                Err(e) => return Err(ResultStoreError::PurgeFailed(e.to_string())),
            }
        }

        Ok(removed)
    }
}
