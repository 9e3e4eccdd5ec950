//! Error types for record resolution
//!
//! None of these reach the caller of `DataSourceResolver::query`: remote errors
//! trigger the fallback dataset and fallback errors yield an empty list.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for remote store operations
pub type RemoteResult<T> = Result<T, RemoteQueryError>;

/// Failure of a single remote fetch
#[derive(Debug, Error)]
pub enum RemoteQueryError {
    /// Endpoint is not an absolute base URL
    #[error("Invalid remote endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// Network or client failure
    #[error("Remote store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Credentials rejected
    #[error("Remote store rejected credentials (HTTP {status})")]
    Unauthorized { status: u16 },

    /// Any other non-success response
    #[error("Remote store returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not a list of records
    #[error("Remote store returned malformed records: {0}")]
    Decode(String),
}

impl RemoteQueryError {
    /// Check if the failure is about credentials rather than reachability
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, RemoteQueryError::Unauthorized { .. })
    }
}

/// Failure to load the bundled fallback dataset
#[derive(Debug, Error)]
pub enum FallbackError {
    #[error("Failed to read fallback data {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed fallback data {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Fallback data {} has no '{field}' list", .path.display())]
    MissingField { path: PathBuf, field: String },
}
