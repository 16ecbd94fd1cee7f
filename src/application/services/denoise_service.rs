use std::sync::Arc;

use crate::application::ports::{ResultStore, ResultStoreError};
use crate::domain::{ProcessedResult, ResultId, UploadedMedia};

use super::processing_pipeline::{ProcessingError, ProcessingPipeline};

/// Validates uploads, runs the pipeline off the async reactor and
/// registers the output.
pub struct DenoiseService {
    pipeline: Arc<ProcessingPipeline>,
    result_store: Arc<dyn ResultStore>,
    max_upload_bytes: usize,
}

impl DenoiseService {
    pub fn new(
        pipeline: Arc<ProcessingPipeline>,
        result_store: Arc<dyn ResultStore>,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            pipeline,
            result_store,
            max_upload_bytes,
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    /// Rejects before any decoding when the payload is over the ceiling.
    pub fn check_size(&self, size_bytes: usize) -> Result<(), DenoiseError> {
        if size_bytes > self.max_upload_bytes {
            return Err(DenoiseError::TooLarge {
                size_bytes,
                limit_bytes: self.max_upload_bytes,
            });
        }
        Ok(())
    }

    #[tracing::instrument(skip(self, media), fields(original_name = %media.original_name))]
    pub async fn submit(&self, media: UploadedMedia) -> Result<ResultId, DenoiseError> {
        self.check_size(media.size_bytes())?;
        if media.data.is_empty() {
            return Err(DenoiseError::EmptyUpload);
        }

        let pipeline = Arc::clone(&self.pipeline);
        // Runs to completion even if the client goes away.
        let result = tokio::task::spawn_blocking(move || pipeline.process(&media))
            .await
            .map_err(|e| DenoiseError::WorkerFailed(e.to_string()))??;

        let id = self.result_store.store(result).await?;

        tracing::info!(result_id = %id, "Processed result registered");

        Ok(id)
    }

    pub async fn fetch(&self, id: &ResultId) -> Result<Option<ProcessedResult>, DenoiseError> {
        Ok(self.result_store.fetch(id).await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DenoiseError {
    #[error("upload of {size_bytes} bytes exceeds the {limit_bytes} byte limit")]
    TooLarge {
        size_bytes: usize,
        limit_bytes: usize,
    },
    #[error("uploaded file is empty")]
    EmptyUpload,
    #[error("processing: {0}")]
    Processing(#[from] ProcessingError),
    #[error("storage: {0}")]
    Storage(#[from] ResultStoreError),
    #[error("processing worker failed: {0}")]
    WorkerFailed(String),
}
