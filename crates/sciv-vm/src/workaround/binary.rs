//! Binary serialization for workaround tables using postcard.

use crate::DataError;

use super::types::WorkaroundTable;

impl WorkaroundTable {
    /// Deserialize a table from binary format.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, DataError> {
        Ok(postcard::from_bytes(bytes)?)
    }

    /// Serialize the table to binary format.
    pub fn to_binary(&self) -> Result<Vec<u8>, DataError> {
        Ok(postcard::to_allocvec(self)?)
    }
}
