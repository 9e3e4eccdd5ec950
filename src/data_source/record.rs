//! Opaque data records

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record as stored remotely or in the fallback file
///
/// The shape is opaque beyond being a JSON object; by convention it carries an
/// `id` field. Serializes exactly as the underlying object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataRecord(Map<String, Value>);

impl DataRecord {
    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}
