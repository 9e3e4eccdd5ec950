//! Integration tests for two-tier record resolution
//!
//! Uses an in-memory `RemoteStore` so fetch counts and failures are
//! deterministic.

use futures::future::join_all;
use kodegen_tools_docshell::data_source::{FallbackDataset, RemoteFuture};
use kodegen_tools_docshell::{
    DataRecord, DataSourceResolver, RecordSource, RemoteQueryError, RemoteStore,
};
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tempfile::TempDir;

mod common;

use common::write_file;

const HOUR: Duration = Duration::from_secs(60 * 60);

/// Remote store that counts fetches and optionally fails or lags
struct CountingStore {
    calls: AtomicUsize,
    fail: bool,
    delay: Duration,
}

impl CountingStore {
    fn healthy() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: false,
            delay: Duration::ZERO,
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: true,
            delay: Duration::ZERO,
        })
    }

    fn slow(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: false,
            delay,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RemoteStore for CountingStore {
    fn fetch<'a>(&'a self, key: &'a str) -> RemoteFuture<'a> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            if self.fail {
                return Err(RemoteQueryError::Status {
                    status: 500,
                    body: "boom".to_string(),
                });
            }
            let records: Vec<DataRecord> =
                serde_json::from_value(json!([{"id": 7, "table": key}])).unwrap();
            Ok(records)
        })
    }
}

fn fallback_dataset(dir: &TempDir) -> FallbackDataset {
    write_file(
        dir.path(),
        "landmarks.json",
        r#"{"landmarks":[{"id":1,"name":"A"}]}"#,
    );
    FallbackDataset::new(dir.path().join("landmarks.json"), "landmarks")
}

fn resolver_with(dir: &TempDir, store: Arc<CountingStore>) -> DataSourceResolver {
    DataSourceResolver::new(
        Some(store as Arc<dyn RemoteStore>),
        fallback_dataset(dir),
        HOUR,
        "landmarks",
    )
}

#[tokio::test]
async fn test_fresh_entry_served_without_refetch() {
    let dir = TempDir::new().unwrap();
    let store = CountingStore::healthy();
    let resolver = resolver_with(&dir, store.clone());

    let first = resolver.query("landmarks").await;
    assert_eq!(first.source, RecordSource::Remote);
    assert_eq!(store.calls(), 1);

    for _ in 0..3 {
        let again = resolver.query("landmarks").await;
        assert_eq!(again.source, RecordSource::Cache);
        assert!(
            Arc::ptr_eq(&first.records, &again.records),
            "cached value should be the stored value, not a copy"
        );
    }
    assert_eq!(store.calls(), 1, "no refetch inside the freshness window");
}

#[tokio::test]
async fn test_failing_remote_serves_fallback_exactly() {
    let dir = TempDir::new().unwrap();
    let store = CountingStore::failing();
    let resolver = resolver_with(&dir, store.clone());

    let resolved = resolver.query("landmarks").await;

    assert_eq!(resolved.source, RecordSource::Fallback);
    assert_eq!(resolved.records.as_slice(), resolver.fallback().as_slice());
    assert!(resolved.advisory.is_some(), "failure should be reported");
    assert_eq!(store.calls(), 1);
}

#[tokio::test]
async fn test_failure_is_not_cached() {
    let dir = TempDir::new().unwrap();
    let store = CountingStore::failing();
    let resolver = resolver_with(&dir, store.clone());

    resolver.query("landmarks").await;
    resolver.query("landmarks").await;

    assert_eq!(store.calls(), 2, "each query should retry the remote store");
    assert!(
        resolver.cache_status().await.is_empty(),
        "a key that never fetched should not keep a cache slot"
    );
}

#[tokio::test]
async fn test_disabled_remote_returns_fallback_unchanged() {
    let dir = TempDir::new().unwrap();
    let resolver = DataSourceResolver::new(None, fallback_dataset(&dir), HOUR, "landmarks");

    let resolved = resolver.query_default().await;

    assert_eq!(resolved.source, RecordSource::Fallback);
    let as_json = serde_json::to_value(resolved.records.as_slice()).unwrap();
    assert_eq!(as_json, json!([{"id": 1, "name": "A"}]));
}

#[tokio::test]
async fn test_unreadable_fallback_yields_empty_list() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "broken.json", "{ not json");
    let fallback = FallbackDataset::new(dir.path().join("broken.json"), "landmarks");
    let resolver = DataSourceResolver::new(None, fallback, HOUR, "landmarks");

    let resolved = resolver.query("landmarks").await;
    assert_eq!(resolved.source, RecordSource::Fallback);
    assert!(resolved.records.is_empty());
}

#[tokio::test]
async fn test_concurrent_queries_share_one_fetch() {
    let dir = TempDir::new().unwrap();
    let store = CountingStore::slow(Duration::from_millis(50));
    let resolver = resolver_with(&dir, store.clone());

    let results = join_all((0..8).map(|_| resolver.query("landmarks"))).await;

    assert_eq!(store.calls(), 1, "concurrent queries should coalesce");
    let remote = results
        .iter()
        .filter(|r| r.source == RecordSource::Remote)
        .count();
    assert_eq!(remote, 1, "exactly one caller performs the fetch");
    for resolved in &results[1..] {
        assert!(Arc::ptr_eq(&results[0].records, &resolved.records));
    }
}

#[tokio::test]
async fn test_cache_status_reports_fresh_entries() {
    let dir = TempDir::new().unwrap();
    let resolver = resolver_with(&dir, CountingStore::healthy());

    resolver.query("landmarks").await;
    resolver.query("events").await;

    let status = resolver.cache_status().await;

    assert_eq!(status.len(), 2);
    assert_eq!(status[0].key, "events");
    assert_eq!(status[1].key, "landmarks");
    assert!(status.iter().all(|s| s.records == 1 && s.fetched_at.is_some()));

    resolver.clear_cache().await;
    assert!(resolver.cache_status().await.is_empty());
}
