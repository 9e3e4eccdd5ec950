//! Type-safe builder for `ShellConfig` using the typestate pattern
//!
//! The content root is the only required field; `build()` only exists once it
//! has been supplied.

use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::{ConfigError, ShellConfig};
use crate::utils::{
    DEFAULT_CACHE_TTL_SECS, DEFAULT_FALLBACK_PATH, DEFAULT_RECORDS_KEY,
    DEFAULT_REMOTE_TIMEOUT_SECS,
};

// Type states for the builder
pub struct WithContentRoot;

pub struct ShellConfigBuilder<State = ()> {
    pub(crate) content_root: Option<PathBuf>,
    pub(crate) cache_ttl_secs: u64,
    pub(crate) remote_timeout_secs: u64,
    pub(crate) max_inline_image_size_bytes: Option<usize>,
    pub(crate) fallback_path: PathBuf,
    pub(crate) records_key: String,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ShellConfigBuilder<()> {
    fn default() -> Self {
        Self {
            content_root: None,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            remote_timeout_secs: DEFAULT_REMOTE_TIMEOUT_SECS,
            max_inline_image_size_bytes: None,
            fallback_path: PathBuf::from(DEFAULT_FALLBACK_PATH),
            records_key: DEFAULT_RECORDS_KEY.to_string(),
            _phantom: PhantomData,
        }
    }
}

impl ShellConfig {
    /// Create a builder for configuring a `ShellConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ShellConfigBuilder<()> {
        ShellConfigBuilder::default()
    }
}

impl ShellConfigBuilder<()> {
    pub fn content_root(self, dir: impl Into<PathBuf>) -> ShellConfigBuilder<WithContentRoot> {
        ShellConfigBuilder {
            content_root: Some(dir.into()),
            cache_ttl_secs: self.cache_ttl_secs,
            remote_timeout_secs: self.remote_timeout_secs,
            max_inline_image_size_bytes: self.max_inline_image_size_bytes,
            fallback_path: self.fallback_path,
            records_key: self.records_key,
            _phantom: PhantomData,
        }
    }
}

// Build method only available when the content root is set
impl ShellConfigBuilder<WithContentRoot> {
    pub fn build(self) -> Result<ShellConfig, ConfigError> {
        let root = self.content_root.unwrap_or_else(|| PathBuf::from("."));

        // Normalize once so every joined path is absolute
        let content_root = std::path::absolute(&root).map_err(|source| ConfigError::ContentRoot {
            path: root.clone(),
            source,
        })?;

        let config = ShellConfig {
            content_root,
            cache_ttl_secs: self.cache_ttl_secs,
            remote_timeout_secs: self.remote_timeout_secs,
            max_inline_image_size_bytes: self.max_inline_image_size_bytes,
            fallback_path: self.fallback_path,
            records_key: self.records_key,
        };
        config.validate()?;
        Ok(config)
    }
}

// Optional settings, available at any state
impl<State> ShellConfigBuilder<State> {
    /// Set the freshness window for remote records
    ///
    /// A TTL of zero makes every query go to the remote store.
    ///
    /// # Example
    /// ```rust
    /// # use kodegen_tools_docshell::config::ShellConfig;
    /// # fn main() -> anyhow::Result<()> {
    /// let config = ShellConfig::builder()
    ///     .content_root("./site")
    ///     .cache_ttl_secs(5 * 60)
    ///     .build()?;
    /// assert_eq!(config.cache_ttl().as_secs(), 300);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn cache_ttl_secs(mut self, secs: u64) -> Self {
        self.cache_ttl_secs = secs;
        self
    }

    #[must_use]
    pub fn remote_timeout_secs(mut self, secs: u64) -> Self {
        self.remote_timeout_secs = secs;
        self
    }

    /// Images larger than this keep their original `src` reference
    #[must_use]
    pub fn max_inline_image_size_bytes(mut self, bytes: Option<usize>) -> Self {
        self.max_inline_image_size_bytes = bytes;
        self
    }

    #[must_use]
    pub fn fallback_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.fallback_path = path.into();
        self
    }

    #[must_use]
    pub fn records_key(mut self, key: impl Into<String>) -> Self {
        self.records_key = key.into();
        self
    }
}
