use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::application::ports::{ResultStore, ResultStoreError};
use crate::domain::{ProcessedResult, ResultId};

struct StoredEntry {
    result: ProcessedResult,
    stored_at: Instant,
}

/// Process-local registry with optional TTL and capacity bounds.
///
/// When full, the oldest entry is evicted to make room for a new one.
pub struct InMemoryResultStore {
    entries: RwLock<HashMap<ResultId, StoredEntry>>,
    ttl: Option<Duration>,
    max_entries: Option<usize>,
}

impl InMemoryResultStore {
    pub fn new(ttl: Option<Duration>, max_entries: Option<usize>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            max_entries: max_entries.filter(|&n| n > 0),
        }
    }

    pub fn unbounded() -> Self {
        Self::new(None, None)
    }

    /// Number of entries currently held, expired ones included until purged.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    fn is_expired(&self, entry: &StoredEntry, now: Instant) -> bool {
        self.ttl
            .is_some_and(|ttl| now.saturating_duration_since(entry.stored_at) >= ttl)
    }
}

impl Default for InMemoryResultStore {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[async_trait::async_trait]
impl ResultStore for InMemoryResultStore {
    async fn store(&self, result: ProcessedResult) -> Result<ResultId, ResultStoreError> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        if let Some(max) = self.max_entries {
            if entries.len() >= max {
                entries.retain(|_, entry| !self.is_expired(entry, now));
            }
            while entries.len() >= max {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.stored_at)
                    .map(|(id, _)| *id);
                let Some(oldest) = oldest else { break };
                entries.remove(&oldest);
                tracing::debug!(
                    result_id = %oldest,
                    "Evicted oldest result to stay within capacity"
                );
            }
        }

        let mut id = ResultId::new();
        while entries.contains_key(&id) {
            id = ResultId::new();
        }

        entries.insert(
            id,
            StoredEntry {
                result,
                stored_at: now,
            },
        );

        Ok(id)
    }

    async fn fetch(&self, id: &ResultId) -> Result<Option<ProcessedResult>, ResultStoreError> {
        let now = Instant::now();
        let entries = self.entries.read().await;
        Ok(entries
            .get(id)
            .filter(|entry| !self.is_expired(entry, now))
            .map(|entry| entry.result.clone()))
    }

    async fn purge_expired(&self) -> Result<usize, ResultStoreError> {
        if self.ttl.is_none() {
            return Ok(0);
        }
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !self.is_expired(entry, now));
        Ok(before - entries.len())
    }
}
