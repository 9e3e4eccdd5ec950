//! Local resource loading and inlining
//!
//! This module reads templates, styles, scripts and images from the content root
//! and turns them into embedded content for self-contained documents.

// Sub-modules
pub mod image_inliner;
pub mod resource_loader;
pub mod types;

// Re-exports for public API
pub use image_inliner::{encode_data_uri, encode_image, inline_image, mime_for_path};
pub use resource_loader::ResourceLoader;
pub use types::{InliningError, LoadError, LoadedResources, ResourceType, SkippedResource};
