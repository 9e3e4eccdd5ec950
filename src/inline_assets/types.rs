//! Type definitions for local resource loading and inlining

use std::path::PathBuf;
use thiserror::Error;

/// Resource type for error tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Template,
    Style,
    Script,
    Image,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceType::Template => write!(f, "template"),
            ResourceType::Style => write!(f, "style"),
            ResourceType::Script => write!(f, "script"),
            ResourceType::Image => write!(f, "image"),
        }
    }
}

/// Error information for an asset that exists but could not be inlined
#[derive(Debug, Clone)]
pub struct InliningError {
    pub path: PathBuf,
    pub resource_type: ResourceType,
    pub error: String,
}

impl std::fmt::Display for InliningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Failed to inline {} {}: {}",
            self.resource_type,
            self.path.display(),
            self.error
        )
    }
}

/// Failures while reading a template and its resources
#[derive(Debug, Error)]
pub enum LoadError {
    /// The template is required; composition cannot continue without it
    #[error("Template not found: {}", .0.display())]
    MissingTemplate(PathBuf),

    /// A file exists but could not be read as text
    #[error("Failed to read {resource_type} {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        resource_type: ResourceType,
        #[source]
        source: std::io::Error,
    },
}

/// A style or script that was listed but not present on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedResource {
    pub path: PathBuf,
    pub resource_type: ResourceType,
}

/// Template text plus the merged style and script blobs
#[derive(Debug, Clone, Default)]
pub struct LoadedResources {
    pub template: String,
    pub styles: String,
    pub scripts: String,
    pub skipped: Vec<SkippedResource>,
}

impl LoadedResources {
    /// Check if any listed resource was missing
    #[must_use]
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}
