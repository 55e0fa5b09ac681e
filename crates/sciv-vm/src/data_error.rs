//! Errors from loading configuration, workaround tables and saved registers.

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary decode error: {0}")]
    Binary(#[from] postcard::Error),

    /// Raw register blocks are a sequence of 4-byte pairs.
    #[error("raw register block of {0} bytes is not a whole number of registers")]
    RawLength(usize),
}
