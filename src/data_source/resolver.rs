//! Two-tier record resolution
//!
//! Queries go to the remote store unless a fresh cached copy exists. Any remote
//! failure, or a remote tier that was never configured, serves the bundled
//! fallback dataset instead. `query` never fails.

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use super::cache::{CacheEntry, CacheStatus, RecordCache};
use super::fallback::FallbackDataset;
use super::record::DataRecord;
use super::remote::{RemoteStore, SupabaseStore};
use crate::advisory::Advisory;
use crate::config::{RuntimeConfig, ShellConfig};

/// Where a query's records came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    Remote,
    Cache,
    Fallback,
}

impl std::fmt::Display for RecordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordSource::Remote => write!(f, "remote"),
            RecordSource::Cache => write!(f, "cache"),
            RecordSource::Fallback => write!(f, "fallback"),
        }
    }
}

/// Records returned by a query, tagged with their source
#[derive(Debug, Clone)]
pub struct Resolved {
    pub records: Arc<Vec<DataRecord>>,
    pub source: RecordSource,
    /// Set when a remote fetch failed and the fallback was served
    pub advisory: Option<Advisory>,
}

pub struct DataSourceResolver {
    remote: Option<Arc<dyn RemoteStore>>,
    cache: RecordCache,
    fallback: FallbackDataset,
    default_key: String,
    startup_advisories: Vec<Advisory>,
}

impl DataSourceResolver {
    /// Build a resolver from explicit parts
    ///
    /// `remote: None` disables the remote tier for the resolver's lifetime and
    /// records a single startup advisory.
    #[must_use]
    pub fn new(
        remote: Option<Arc<dyn RemoteStore>>,
        fallback: FallbackDataset,
        ttl: Duration,
        default_key: impl Into<String>,
    ) -> Self {
        let mut startup_advisories = Vec::new();
        match &remote {
            Some(store) => log::info!("Remote records enabled via {}", store.describe()),
            None => {
                log::warn!("Remote connection settings missing; serving bundled records only");
                startup_advisories.push(Advisory::warning(
                    "Remote connection settings are missing; using the bundled offline dataset",
                ));
            }
        }

        Self {
            remote,
            cache: RecordCache::new(ttl),
            fallback,
            default_key: default_key.into(),
            startup_advisories,
        }
    }

    /// Build a resolver from the shell and runtime configuration
    #[must_use]
    pub fn from_config(config: &ShellConfig, runtime: &RuntimeConfig) -> Self {
        let fallback = FallbackDataset::new(config.fallback_file(), config.records_key());

        let mut client_failure = None;
        let remote: Option<Arc<dyn RemoteStore>> = match runtime.remote_settings() {
            None => None,
            Some(settings) => match SupabaseStore::new(settings, config.remote_timeout()) {
                Ok(store) => Some(Arc::new(store) as Arc<dyn RemoteStore>),
                Err(e) => {
                    log::error!("Failed to create remote client: {e}");
                    client_failure = Some(Advisory::error(format!(
                        "Could not create the remote client: {e}"
                    )));
                    None
                }
            },
        };

        let mut resolver = Self::new(
            remote,
            fallback,
            config.cache_ttl(),
            config.records_key(),
        );
        if let Some(advisory) = client_failure {
            resolver.startup_advisories.insert(0, advisory);
        }
        resolver
    }

    #[must_use]
    pub fn is_remote_enabled(&self) -> bool {
        self.remote.is_some()
    }

    #[must_use]
    pub fn startup_advisories(&self) -> &[Advisory] {
        &self.startup_advisories
    }

    #[must_use]
    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    /// Records for `key`
    pub async fn query(&self, key: &str) -> Resolved {
        let Some(remote) = &self.remote else {
            return self.fallback_result(None);
        };

        // Held across fetch so concurrent queries for this key coalesce
        let slot = self.cache.slot(key);
        let mut entry = slot.lock().await;

        if let Some(cached) = entry.as_ref().filter(|e| e.is_fresh(self.cache.ttl())) {
            log::debug!("Serving cached records for '{key}'");
            return Resolved {
                records: Arc::clone(&cached.value),
                source: RecordSource::Cache,
                advisory: None,
            };
        }

        match remote.fetch(key).await {
            Ok(records) => {
                let records = Arc::new(records);
                log::info!("Fetched {} records for '{key}'", records.len());
                *entry = Some(CacheEntry::new(key, Arc::clone(&records)));
                Resolved {
                    records,
                    source: RecordSource::Remote,
                    advisory: None,
                }
            }
            Err(e) => {
                // Stale entry, if any, stays for the next attempt
                if entry.is_none() {
                    self.cache.discard_unused(key, &slot);
                }
                log::warn!("Remote query for '{key}' failed, serving fallback: {e}");
                self.fallback_result(Some(Advisory::warning(format!(
                    "Could not load '{key}' from the remote store: {e}"
                ))))
            }
        }
    }

    /// Records for the configured default key
    pub async fn query_default(&self) -> Resolved {
        self.query(&self.default_key).await
    }

    /// The bundled fallback records
    #[must_use]
    pub fn fallback(&self) -> Arc<Vec<DataRecord>> {
        self.fallback.records()
    }

    pub async fn cache_status(&self) -> Vec<CacheStatus> {
        self.cache.snapshot().await
    }

    pub async fn invalidate(&self, key: &str) {
        self.cache.invalidate(key).await;
    }

    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }

    fn fallback_result(&self, advisory: Option<Advisory>) -> Resolved {
        Resolved {
            records: self.fallback.records(),
            source: RecordSource::Fallback,
            advisory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_source::errors::RemoteQueryError;
    use crate::data_source::remote::RemoteFuture;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    struct ScriptedStore {
        calls: AtomicUsize,
        fail: bool,
    }

    impl RemoteStore for ScriptedStore {
        fn fetch<'a>(&'a self, key: &'a str) -> RemoteFuture<'a> {
            Box::pin(async move {
                let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
                if self.fail {
                    return Err(RemoteQueryError::Status {
                        status: 503,
                        body: "unavailable".to_string(),
                    });
                }
                let record = serde_json::json!({"id": n, "key": key});
                Ok(vec![serde_json::from_value(record).unwrap()])
            })
        }
    }

    fn fallback(dir: &TempDir) -> FallbackDataset {
        let path = dir.path().join("landmarks.json");
        std::fs::write(&path, r#"{"landmarks":[{"id":0,"name":"offline"}]}"#).unwrap();
        FallbackDataset::new(path, "landmarks")
    }

    fn resolver(dir: &TempDir, store: Arc<ScriptedStore>, ttl: Duration) -> DataSourceResolver {
        DataSourceResolver::new(
            Some(store as Arc<dyn RemoteStore>),
            fallback(dir),
            ttl,
            "landmarks",
        )
    }

    fn scripted(fail: bool) -> Arc<ScriptedStore> {
        Arc::new(ScriptedStore {
            calls: AtomicUsize::new(0),
            fail,
        })
    }

    #[tokio::test]
    async fn test_stale_entry_is_refetched() {
        let dir = TempDir::new().unwrap();
        let store = scripted(false);
        let resolver = resolver(&dir, store.clone(), Duration::ZERO);

        let first = resolver.query("landmarks").await;
        let second = resolver.query("landmarks").await;

        assert_eq!(store.calls.load(Ordering::SeqCst), 2);
        assert_eq!(first.source, RecordSource::Remote);
        assert_eq!(second.source, RecordSource::Remote);
        assert_eq!(second.records[0].id(), Some(&serde_json::json!(2)));
    }

    #[tokio::test]
    async fn test_failure_keeps_stale_entry_for_next_attempt() {
        let dir = TempDir::new().unwrap();
        let store = scripted(true);
        // Zero TTL: any stored entry is already stale
        let resolver = resolver(&dir, store.clone(), Duration::ZERO);

        *resolver.cache.slot("landmarks").lock().await =
            Some(CacheEntry::new("landmarks", Arc::new(Vec::new())));

        let resolved = resolver.query("landmarks").await;
        assert_eq!(resolved.source, RecordSource::Fallback);
        assert!(resolved.advisory.is_some());

        let status = resolver.cache_status().await;
        assert_eq!(status[0].state, crate::data_source::EntryState::Stale);

        resolver.query("landmarks").await;
        assert_eq!(store.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_keys_are_cached_independently() {
        let dir = TempDir::new().unwrap();
        let store = scripted(false);
        let resolver = resolver(&dir, store.clone(), Duration::from_secs(3600));

        resolver.query("landmarks").await;
        resolver.query("events").await;
        resolver.query("landmarks").await;

        assert_eq!(store.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let dir = TempDir::new().unwrap();
        let store = scripted(false);
        let resolver = resolver(&dir, store.clone(), Duration::from_secs(3600));

        resolver.query_default().await;
        resolver.invalidate("landmarks").await;
        let resolved = resolver.query_default().await;

        assert_eq!(resolved.source, RecordSource::Remote);
        assert_eq!(store.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_missing_remote_reports_once_at_startup() {
        let dir = TempDir::new().unwrap();
        let resolver =
            DataSourceResolver::new(None, fallback(&dir), Duration::from_secs(3600), "landmarks");

        assert!(!resolver.is_remote_enabled());
        assert_eq!(resolver.startup_advisories().len(), 1);

        let resolved = resolver.query("landmarks").await;
        assert_eq!(resolved.source, RecordSource::Fallback);
        assert!(resolved.advisory.is_none());
        assert!(resolver.cache_status().await.is_empty());
    }

    #[tokio::test]
    async fn test_failed_keys_leave_no_slot_behind() {
        let dir = TempDir::new().unwrap();
        let store = scripted(true);
        let resolver = resolver(&dir, store.clone(), Duration::from_secs(3600));

        for key in ["a", "b", "c"] {
            resolver.query(key).await;
        }

        assert!(resolver.cache.is_empty());
        assert_eq!(store.calls.load(Ordering::SeqCst), 3);
    }
}
