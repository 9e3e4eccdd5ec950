//! Core configuration types for document composition and record resolution
//!
//! `ShellConfig` describes where content lives and how the resolver behaves.
//! `RuntimeConfig` carries the settings handed to the page at render time.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::utils::{
    DEFAULT_CACHE_TTL_SECS, DEFAULT_FALLBACK_PATH, DEFAULT_RECORDS_KEY,
    DEFAULT_REMOTE_TIMEOUT_SECS,
};

/// Errors raised while building or loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment flag held something other than a recognised boolean
    #[error("Invalid value for {var}: '{value}' (expected true/false, yes/no, on/off or 1/0)")]
    InvalidFlag { var: String, value: String },

    /// A zero remote timeout would fail every fetch before it starts
    #[error("remote_timeout_secs must be greater than zero")]
    ZeroRemoteTimeout,

    /// The content root could not be made absolute
    #[error("Failed to resolve content root {path:?}: {source}")]
    ContentRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Settings injected into every composed document.
///
/// Read once at process start and shared read-only afterwards. Empty strings
/// stand for unset values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub cache_enabled: bool,
    pub remote_endpoint: String,
    pub remote_key: String,
    pub api_key: String,
}

/// Borrowed view of the remote connection settings, present only when the
/// remote tier is usable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteSettings<'a> {
    pub endpoint: &'a str,
    pub key: &'a str,
}

impl RuntimeConfig {
    /// Remote connection settings, or `None` when the remote tier is disabled
    /// or either the endpoint or key is missing.
    #[must_use]
    pub fn remote_settings(&self) -> Option<RemoteSettings<'_>> {
        let endpoint = self.remote_endpoint.trim();
        let key = self.remote_key.trim();

        if !self.cache_enabled || endpoint.is_empty() || key.is_empty() {
            return None;
        }

        Some(RemoteSettings { endpoint, key })
    }
}

/// Main configuration for the document shell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Root every template, resource and image path is resolved against.
    ///
    /// **INVARIANT:** Always an absolute path (normalized in builder).
    pub(crate) content_root: PathBuf,

    /// Freshness window for remotely fetched records, in seconds
    pub(crate) cache_ttl_secs: u64,

    /// Per-request timeout for the remote store, in seconds
    pub(crate) remote_timeout_secs: u64,

    /// Maximum size in bytes for inlining images as base64.
    /// Larger images keep their original reference.
    /// Default is None (all images are inlined).
    pub(crate) max_inline_image_size_bytes: Option<usize>,

    /// Bundled fallback dataset, relative to `content_root`
    pub(crate) fallback_path: PathBuf,

    /// Field of the fallback file holding the record list, and the default query key
    pub(crate) records_key: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("."),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            remote_timeout_secs: DEFAULT_REMOTE_TIMEOUT_SECS,
            max_inline_image_size_bytes: None,
            fallback_path: PathBuf::from(DEFAULT_FALLBACK_PATH),
            records_key: DEFAULT_RECORDS_KEY.to_string(),
        }
    }
}

impl ShellConfig {
    /// Reject settings that cannot work at runtime
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.remote_timeout_secs == 0 {
            return Err(ConfigError::ZeroRemoteTimeout);
        }
        Ok(())
    }
}
