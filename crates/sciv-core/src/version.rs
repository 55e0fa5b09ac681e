//! Engine generations.
//!
//! Versions are totally ordered: later generations compare greater, so
//! feature gates read as `version >= SciVersion::Sci2`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Script interpreter generation, oldest first.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum SciVersion {
    Sci0Early,
    Sci0Late,
    Sci01,
    Sci1EgaOnly,
    Sci1Early,
    Sci1Middle,
    Sci1Late,
    Sci11,
    Sci2,
    Sci21Early,
    Sci21Middle,
    Sci21Late,
    Sci3,
}

impl SciVersion {
    /// Every version, oldest first.
    pub const ALL: [Self; 13] = [
        Self::Sci0Early,
        Self::Sci0Late,
        Self::Sci01,
        Self::Sci1EgaOnly,
        Self::Sci1Early,
        Self::Sci1Middle,
        Self::Sci1Late,
        Self::Sci11,
        Self::Sci2,
        Self::Sci21Early,
        Self::Sci21Middle,
        Self::Sci21Late,
        Self::Sci3,
    ];

    /// Canonical lowercase name, as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sci0Early => "sci0_early",
            Self::Sci0Late => "sci0_late",
            Self::Sci01 => "sci01",
            Self::Sci1EgaOnly => "sci1_egaonly",
            Self::Sci1Early => "sci1_early",
            Self::Sci1Middle => "sci1_middle",
            Self::Sci1Late => "sci1_late",
            Self::Sci11 => "sci1.1",
            Self::Sci2 => "sci2",
            Self::Sci21Early => "sci2.1_early",
            Self::Sci21Middle => "sci2.1_middle",
            Self::Sci21Late => "sci2.1_late",
            Self::Sci3 => "sci3",
        }
    }

    /// 32-bit interpreters (SCI2 and later).
    pub fn is_sci32(self) -> bool {
        self >= Self::Sci2
    }

    /// Whether registers use the extended 18-bit offset layout.
    pub fn has_extended_offsets(self) -> bool {
        self >= Self::Sci3
    }
}

impl fmt::Display for SciVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a version name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVersionError {
    name: String,
}

impl fmt::Display for ParseVersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown engine version `{}`", self.name)
    }
}

impl std::error::Error for ParseVersionError {}

impl FromStr for SciVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.name() == wanted)
            .ok_or(ParseVersionError { name: s.to_owned() })
    }
}

impl TryFrom<String> for SciVersion {
    type Error = ParseVersionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SciVersion> for &'static str {
    fn from(v: SciVersion) -> Self {
        v.name()
    }
}
