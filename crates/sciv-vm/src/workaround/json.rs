//! JSON form of the workaround database.
//!
//! ```json
//! {
//!   "object_reference_test": 2000,
//!   "entries": [
//!     { "operation": "comparison", "script": 64990, "object": "Sound", "method": "pause", "value": 0 }
//!   ]
//! }
//! ```

use serde::Deserialize;

use crate::DataError;

use super::types::{WorkaroundEntry, WorkaroundTable};

impl WorkaroundTable {
    /// Parse a table from JSON.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let raw: RawWorkaroundTable = serde_json::from_str(json)?;
        Ok(raw.into())
    }
}

/// Flat list form, as written by hand.
#[derive(Debug, Default, Deserialize)]
struct RawWorkaroundTable {
    #[serde(default)]
    object_reference_test: Option<u16>,
    #[serde(default)]
    entries: Vec<WorkaroundEntry>,
}

impl From<RawWorkaroundTable> for WorkaroundTable {
    fn from(raw: RawWorkaroundTable) -> Self {
        let table: Self = raw.entries.into_iter().collect();
        table.with_object_reference_test(raw.object_reference_test)
    }
}
