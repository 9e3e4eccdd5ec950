//! Bundled fallback dataset
//!
//! A single JSON file holding `{"<field>": [ ...records ]}`. Parsed once on
//! first use; any problem with the file yields an empty list.

use once_cell::sync::OnceCell;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::errors::FallbackError;
use super::record::DataRecord;

/// Read and parse the record list from a fallback file
pub fn load_records(path: &Path, field: &str) -> Result<Vec<DataRecord>, FallbackError> {
    let text = std::fs::read_to_string(path).map_err(|source| FallbackError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut document: Value = serde_json::from_str(&text).map_err(|source| FallbackError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let list = document
        .get_mut(field)
        .map(Value::take)
        .ok_or_else(|| FallbackError::MissingField {
            path: path.to_path_buf(),
            field: field.to_string(),
        })?;

    serde_json::from_value(list).map_err(|source| FallbackError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Lazily loaded, process-wide fallback records
#[derive(Debug)]
pub struct FallbackDataset {
    path: PathBuf,
    field: String,
    records: OnceCell<Arc<Vec<DataRecord>>>,
}

impl FallbackDataset {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, field: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            field: field.into(),
            records: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The fallback records, loading them on first call
    pub fn records(&self) -> Arc<Vec<DataRecord>> {
        self.records
            .get_or_init(|| match load_records(&self.path, &self.field) {
                Ok(records) => {
                    log::info!(
                        "Loaded {} fallback records from {}",
                        records.len(),
                        self.path.display()
                    );
                    Arc::new(records)
                }
                Err(e) => {
                    log::error!("{e}; serving an empty fallback list");
                    Arc::new(Vec::new())
                }
            })
            .clone()
    }
}
