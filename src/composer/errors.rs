//! Error types for document composition

use std::path::PathBuf;
use thiserror::Error;

use crate::inline_assets::{LoadError, ResourceType};

/// Result type alias for composition
pub type ComposeResult<T> = Result<T, ComposeError>;

/// Reasons a composition yields no document
#[derive(Debug, Error)]
pub enum ComposeError {
    /// Required template file absent
    #[error("Template not found: {}", .0.display())]
    MissingTemplate(PathBuf),

    /// Template or resource exists but could not be read as text
    #[error("Failed to read {resource_type} {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        resource_type: ResourceType,
        #[source]
        source: std::io::Error,
    },

    /// Template has no insertion point for merged content
    #[error("Template {} has no {marker} marker", .template.display())]
    MissingAnchor {
        template: PathBuf,
        marker: &'static str,
    },

    /// Runtime config could not be encoded
    #[error("Failed to serialize runtime config: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<LoadError> for ComposeError {
    fn from(error: LoadError) -> Self {
        match error {
            LoadError::MissingTemplate(path) => ComposeError::MissingTemplate(path),
            LoadError::Read {
                path,
                resource_type,
                source,
            } => ComposeError::Read {
                path,
                resource_type,
                source,
            },
        }
    }
}

impl ComposeError {
    #[must_use]
    pub fn is_missing_template(&self) -> bool {
        matches!(self, ComposeError::MissingTemplate(_))
    }
}
