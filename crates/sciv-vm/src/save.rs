//! Register blocks as persisted in save games.
//!
//! Registers are written as their stored pairs, never as logical values, so
//! a block saved by one interpreter generation restores bit-for-bit under the
//! same generation.

use serde::{Deserialize, Serialize};

use sciv_core::SciVersion;

use crate::DataError;
use crate::register::{Encoding, RawReg, Reg};

/// Bytes per register in the flat form.
pub const RAW_REG_SIZE: usize = 4;

/// Stored registers together with the version whose layout they use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRegisters {
    version: SciVersion,
    raw: Vec<RawReg>,
}

impl SavedRegisters {
    /// Pack `regs` with the layout of `version`.
    pub fn capture(version: SciVersion, regs: &[Reg]) -> Self {
        let encoding = Encoding::for_version(version);
        Self {
            version,
            raw: regs.iter().map(|&r| encoding.encode(r)).collect(),
        }
    }

    /// Wrap already-stored pairs.
    pub fn from_raw(version: SciVersion, raw: Vec<RawReg>) -> Self {
        Self { version, raw }
    }

    /// Unpack to logical registers.
    pub fn restore(&self) -> Vec<Reg> {
        let encoding = self.encoding();
        self.raw.iter().map(|&r| encoding.decode(r)).collect()
    }

    pub fn version(&self) -> SciVersion {
        self.version
    }

    pub fn encoding(&self) -> Encoding {
        Encoding::for_version(self.version)
    }

    pub fn raw(&self) -> &[RawReg] {
        &self.raw
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Flat form: each pair as segment then offset, little-endian.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.raw.iter().flat_map(|r| r.to_le_bytes()).collect()
    }

    /// Parse the flat form.
    pub fn from_le_bytes(version: SciVersion, bytes: &[u8]) -> Result<Self, DataError> {
        if bytes.len() % RAW_REG_SIZE != 0 {
            return Err(DataError::RawLength(bytes.len()));
        }
        let raw = bytes
            .chunks_exact(RAW_REG_SIZE)
            .map(|c| RawReg::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        Ok(Self { version, raw })
    }

    /// Deserialize from binary format (version included).
    pub fn from_binary(bytes: &[u8]) -> Result<Self, DataError> {
        Ok(postcard::from_bytes(bytes)?)
    }

    /// Serialize to binary format (version included).
    pub fn to_binary(&self) -> Result<Vec<u8>, DataError> {
        Ok(postcard::to_allocvec(self)?)
    }
}
