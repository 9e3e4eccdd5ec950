//! Image inlining as base64 data URIs
//!
//! Reads a local image and encodes it as `data:<mime>;base64,<payload>`.
//! Failures never escape: a missing, unreadable or oversized image yields
//! `None` and the caller keeps the original reference.

use base64::Engine;
use std::path::Path;

use super::types::{InliningError, ResourceType};

/// MIME type for an image path, from its extension
///
/// Unknown extensions fall back to `image/png`, the format of the bundled logos.
#[must_use]
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("avif") => "image/avif",
        _ => "image/png",
    }
}

/// Encode raw bytes as a data URI
#[must_use]
pub fn encode_data_uri(bytes: &[u8], content_type: &str) -> String {
    let encoded_capacity = base64::encoded_len(bytes.len(), true).unwrap_or(0);
    let mut encoded = String::with_capacity(encoded_capacity + 16 + content_type.len());

    encoded.push_str("data:");
    encoded.push_str(content_type);
    encoded.push_str(";base64,");

    // STANDARD (padded) encoding for browser compatibility
    base64::engine::general_purpose::STANDARD.encode_string(bytes, &mut encoded);

    encoded
}

/// Read and encode an image, distinguishing "nothing to do" from a read failure
///
/// Returns `Ok(None)` when the file does not exist or is larger than
/// `max_inline_size_bytes`, and `Err` when it exists but cannot be read.
pub fn encode_image(
    path: &Path,
    max_inline_size_bytes: Option<usize>,
) -> Result<Option<String>, InliningError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("Image not found, keeping reference: {}", path.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(InliningError {
                path: path.to_path_buf(),
                resource_type: ResourceType::Image,
                error: e.to_string(),
            });
        }
    };

    if let Some(max_size) = max_inline_size_bytes
        && bytes.len() > max_size
    {
        log::debug!(
            "Image size ({} bytes) exceeds max_inline_size_bytes ({} bytes), keeping as external reference: {}",
            bytes.len(),
            max_size,
            path.display()
        );
        return Ok(None);
    }

    Ok(Some(encode_data_uri(&bytes, mime_for_path(path))))
}

/// Inline an image, degrading every failure to `None`
#[must_use]
pub fn inline_image(path: &Path, max_inline_size_bytes: Option<usize>) -> Option<String> {
    match encode_image(path, max_inline_size_bytes) {
        Ok(data_uri) => data_uri,
        Err(inlining_error) => {
            log::warn!("{inlining_error}");
            None
        }
    }
}
