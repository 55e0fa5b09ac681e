//! Per-VM-instance configuration.
//!
//! ```json
//! {
//!   "version": "sci1.1",
//!   "legacy_object_test": true,
//!   "workarounds": [
//!     { "operation": "addition", "script": 928, "object": "Narrator", "method": "startText", "value": 0 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use sciv_core::{SciVersion, SegmentTable};

use crate::DataError;
use crate::engine::RegContext;
use crate::register::Encoding;
use crate::workaround::{WorkaroundEntry, WorkaroundTable};

/// Settings fixed for the lifetime of one VM instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmConfig {
    pub(crate) version: SciVersion,
    /// Enable the pointer-vs-small-number rule on interpreters that had it.
    #[serde(default = "enabled")]
    pub(crate) legacy_object_test: bool,
    #[serde(default)]
    pub(crate) workarounds: Vec<WorkaroundEntry>,
}

fn enabled() -> bool {
    true
}

impl VmConfig {
    pub fn new(version: SciVersion) -> Self {
        Self {
            version,
            legacy_object_test: true,
            workarounds: Vec::new(),
        }
    }

    /// Parse configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Toggle the legacy object reference comparison rule.
    pub fn legacy_object_test(mut self, enabled: bool) -> Self {
        self.legacy_object_test = enabled;
        self
    }

    /// Add a workaround entry.
    pub fn workaround(mut self, entry: WorkaroundEntry) -> Self {
        self.workarounds.push(entry);
        self
    }

    pub fn version(&self) -> SciVersion {
        self.version
    }

    pub fn encoding(&self) -> Encoding {
        Encoding::for_version(self.version)
    }

    /// Build the read-only workaround database this configuration describes.
    pub fn workaround_table(&self) -> WorkaroundTable {
        let mut table = if self.legacy_object_test {
            WorkaroundTable::builtin(self.version)
        } else {
            WorkaroundTable::new()
        };
        table.extend(self.workarounds.iter().cloned());
        table
    }

    /// Register context for this configuration.
    pub fn context<'a>(
        &self,
        segments: &'a dyn SegmentTable,
        workarounds: &'a WorkaroundTable,
    ) -> RegContext<'a> {
        RegContext::new(self.version, segments, workarounds)
    }
}
