//! Store error types.

use cascade_codec::{CodecError, ResolveError};

/// Record store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Codec error.
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
    /// The codec named in the file header is not registered.
    #[error("Codec resolution failed: {0}")]
    Resolve(#[from] ResolveError),
    /// Not a record store file.
    #[error("Bad magic: not a record store")]
    BadMagic,
    /// Unsupported format version.
    #[error("Unsupported store version: {0}")]
    UnsupportedVersion(u8),
    /// Truncated data at offset.
    #[error("Truncated store at offset {0}")]
    Truncated(u64),
    /// Block size must be positive.
    #[error("Invalid block size: must be positive")]
    InvalidBlockSize,
    /// Structurally invalid store contents.
    #[error("Corrupt store: {0}")]
    Corrupt(String),
}
