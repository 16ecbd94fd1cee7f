use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;

use hushwave::application::ports::ResultStore;
use hushwave::domain::{AudioFormat, OutputFilename, ProcessedResult, ResultId};
use hushwave::infrastructure::storage::InMemoryResultStore;

fn result(payload: &'static [u8]) -> ProcessedResult {
    ProcessedResult::new(
        Bytes::from_static(payload),
        OutputFilename::derive("memo.wav", AudioFormat::Wav),
        AudioFormat::Wav,
    )
}

#[tokio::test]
async fn given_stored_result_when_fetching_then_returns_same_result() {
    let store = InMemoryResultStore::unbounded();
    let original = result(b"first");

    let id = store.store(original.clone()).await.unwrap();

    assert_eq!(store.fetch(&id).await.unwrap(), Some(original));
}

#[tokio::test]
async fn given_unknown_id_when_fetching_then_returns_none() {
    let store = InMemoryResultStore::unbounded();

    assert!(store.fetch(&ResultId::new()).await.unwrap().is_none());
}

#[tokio::test]
async fn given_many_stores_when_collecting_ids_then_all_unique() {
    let store = InMemoryResultStore::unbounded();
    let mut ids = HashSet::new();

    for _ in 0..200 {
        ids.insert(store.store(result(b"x")).await.unwrap());
    }

    assert_eq!(ids.len(), 200);
    assert_eq!(store.len().await, 200);
}

#[tokio::test]
async fn given_concurrent_stores_when_finished_then_every_result_is_fetchable() {
    let store = Arc::new(InMemoryResultStore::unbounded());

    let handles: Vec<_> = (0..32)
        .map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.store(result(b"concurrent")).await.unwrap() })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    assert_eq!(ids.len(), 32);
    for id in &ids {
        assert!(store.fetch(id).await.unwrap().is_some());
    }
}

#[tokio::test(start_paused = true)]
async fn given_ttl_elapsed_when_fetching_then_returns_none() {
    let store = InMemoryResultStore::new(Some(Duration::from_secs(60)), None);
    let id = store.store(result(b"short lived")).await.unwrap();

    tokio::time::advance(Duration::from_secs(59)).await;
    assert!(store.fetch(&id).await.unwrap().is_some());

    tokio::time::advance(Duration::from_secs(1)).await;
    assert!(store.fetch(&id).await.unwrap().is_none());
}

#[tokio::test(start_paused = true)]
async fn given_expired_and_fresh_results_when_purging_then_only_expired_removed() {
    let store = InMemoryResultStore::new(Some(Duration::from_secs(10)), None);
    let old = store.store(result(b"old")).await.unwrap();
    tokio::time::advance(Duration::from_secs(6)).await;
    let fresh = store.store(result(b"fresh")).await.unwrap();
    tokio::time::advance(Duration::from_secs(5)).await;

    let removed = store.purge_expired().await.unwrap();

    assert_eq!(removed, 1);
    assert!(store.fetch(&old).await.unwrap().is_none());
    assert!(store.fetch(&fresh).await.unwrap().is_some());
}

#[tokio::test]
async fn given_no_ttl_when_purging_then_nothing_removed() {
    let store = InMemoryResultStore::unbounded();
    store.store(result(b"kept")).await.unwrap();

    assert_eq!(store.purge_expired().await.unwrap(), 0);
    assert_eq!(store.len().await, 1);
}

#[tokio::test(start_paused = true)]
async fn given_store_at_capacity_when_storing_then_oldest_is_evicted() {
    let store = InMemoryResultStore::new(None, Some(2));
    let first = store.store(result(b"1")).await.unwrap();
    tokio::time::advance(Duration::from_millis(10)).await;
    let second = store.store(result(b"2")).await.unwrap();
    tokio::time::advance(Duration::from_millis(10)).await;

    let third = store.store(result(b"3")).await.unwrap();

    assert_eq!(store.len().await, 2);
    assert!(store.fetch(&first).await.unwrap().is_none());
    assert!(store.fetch(&second).await.unwrap().is_some());
    assert!(store.fetch(&third).await.unwrap().is_some());
}

#[tokio::test(start_paused = true)]
async fn given_store_at_capacity_with_expired_entries_when_storing_then_expired_go_first() {
    let store = InMemoryResultStore::new(Some(Duration::from_secs(30)), Some(2));
    let expired = store.store(result(b"1")).await.unwrap();
    tokio::time::advance(Duration::from_secs(20)).await;
    let live = store.store(result(b"2")).await.unwrap();
    tokio::time::advance(Duration::from_secs(15)).await;

    let newest = store.store(result(b"3")).await.unwrap();

    assert_eq!(store.len().await, 2);
    assert!(store.fetch(&expired).await.unwrap().is_none());
    assert!(store.fetch(&live).await.unwrap().is_some());
    assert!(store.fetch(&newest).await.unwrap().is_some());
}
