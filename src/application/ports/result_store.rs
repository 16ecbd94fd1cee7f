use std::io;

use crate::domain::{ProcessedResult, ResultId};

/// Short-lived, identifier addressed storage for processed files.
///
/// Entries are append-only: there is no update, and removal only happens
/// through expiry or capacity eviction.
#[async_trait::async_trait]
pub trait ResultStore: Send + Sync {
    /// Stores `result` under a freshly generated identifier that is not
    /// currently live in the store.
    async fn store(&self, result: ProcessedResult) -> Result<ResultId, ResultStoreError>;

    /// `Ok(None)` for unknown or expired identifiers.
    async fn fetch(&self, id: &ResultId) -> Result<Option<ProcessedResult>, ResultStoreError>;

    /// Drops expired entries and returns how many were removed.
    async fn purge_expired(&self) -> Result<usize, ResultStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ResultStoreError {
    #[error("store failed: {0}")]
    StoreFailed(String),
    #[error("fetch failed: {0}")]
    FetchFailed(String),
    #[error("purge failed: {0}")]
    PurgeFailed(String),
    #[error("invalid storage configuration: {0}")]
    InvalidConfig(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
