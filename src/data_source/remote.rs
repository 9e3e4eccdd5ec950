//! Remote record store
//!
//! `RemoteStore` is the seam the resolver fetches through. `SupabaseStore`
//! implements it against a PostgREST endpoint: one table per query key.

use futures::future::BoxFuture;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

use super::errors::{RemoteQueryError, RemoteResult};
use super::record::DataRecord;
use crate::config::RemoteSettings;

/// Boxed future returned by `RemoteStore::fetch`
pub type RemoteFuture<'a> = BoxFuture<'a, RemoteResult<Vec<DataRecord>>>;

/// A source of records addressed by key
pub trait RemoteStore: Send + Sync {
    /// Fetch every record for `key`
    fn fetch<'a>(&'a self, key: &'a str) -> RemoteFuture<'a>;

    /// Short human-readable description for status output
    fn describe(&self) -> String {
        "remote store".to_string()
    }
}

/// PostgREST (Supabase) table reader
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    client: Client,
    endpoint: Url,
    key: String,
}

impl SupabaseStore {
    pub fn new(settings: RemoteSettings<'_>, timeout: Duration) -> RemoteResult<Self> {
        let endpoint = Url::parse(settings.endpoint).map_err(|e| {
            RemoteQueryError::InvalidEndpoint {
                endpoint: settings.endpoint.to_string(),
                reason: e.to_string(),
            }
        })?;
        if endpoint.cannot_be_a_base() {
            return Err(RemoteQueryError::InvalidEndpoint {
                endpoint: settings.endpoint.to_string(),
                reason: "not a base URL".to_string(),
            });
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            key: settings.key.to_string(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// `{endpoint}/rest/v1/{table}?select=*` with `table` as one encoded segment
    #[must_use]
    pub fn table_url(&self, table: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.set_fragment(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["rest", "v1", table]);
        }
        url.query_pairs_mut().clear().append_pair("select", "*");
        url
    }

    async fn fetch_table(&self, table: &str) -> RemoteResult<Vec<DataRecord>> {
        let url = self.table_url(table);
        log::debug!("Fetching records from {url}");

        let response = self
            .client
            .get(url)
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(RemoteQueryError::Unauthorized {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteQueryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| RemoteQueryError::Decode(e.to_string()))
    }
}

impl RemoteStore for SupabaseStore {
    fn fetch<'a>(&'a self, key: &'a str) -> RemoteFuture<'a> {
        Box::pin(self.fetch_table(key))
    }

    fn describe(&self) -> String {
        format!("supabase at {}", self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(endpoint: &str) -> SupabaseStore {
        SupabaseStore::new(
            RemoteSettings {
                endpoint,
                key: "k",
            },
            Duration::from_secs(1),
        )
        .unwrap()
    }

    #[test]
    fn test_table_url_layout() {
        let url = store("https://abc.supabase.co").table_url("landmarks");
        assert_eq!(url.as_str(), "https://abc.supabase.co/rest/v1/landmarks?select=*");
    }

    #[test]
    fn test_table_url_keeps_endpoint_path() {
        let url = store("https://proxy.example/base/").table_url("events");
        assert_eq!(url.as_str(), "https://proxy.example/base/rest/v1/events?select=*");
    }

    #[test]
    fn test_table_name_cannot_add_segments_or_filters() {
        let url = store("https://abc.supabase.co").table_url("a/b?id=eq.1#frag");

        assert_eq!(url.path(), "/rest/v1/a%2Fb%3Fid=eq.1%23frag");
        assert_eq!(url.query(), Some("select=*"));
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_non_base_endpoint_is_rejected() {
        let result = SupabaseStore::new(
            RemoteSettings {
                endpoint: "mailto:ops@example.com",
                key: "k",
            },
            Duration::from_secs(1),
        );
        assert!(matches!(result, Err(RemoteQueryError::InvalidEndpoint { .. })));
    }
}
