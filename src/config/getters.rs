//! Getter methods for `ShellConfig`

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::types::ShellConfig;

impl ShellConfig {
    #[must_use]
    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    #[must_use]
    pub fn remote_timeout(&self) -> Duration {
        Duration::from_secs(self.remote_timeout_secs)
    }

    #[must_use]
    pub fn max_inline_image_size_bytes(&self) -> Option<usize> {
        self.max_inline_image_size_bytes
    }

    #[must_use]
    pub fn records_key(&self) -> &str {
        &self.records_key
    }

    /// Absolute path of the bundled fallback dataset
    #[must_use]
    pub fn fallback_file(&self) -> PathBuf {
        self.resolve(&self.fallback_path)
    }

    /// Resolve a content-relative path against the content root
    #[must_use]
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.content_root.join(relative)
    }
}
