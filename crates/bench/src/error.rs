//! Benchmark error taxonomy.

use cascade_codec::{CodecError, ResolveError};
use cascade_store::StoreError;

/// Round-trip validation failures, the correctness signal the harness
/// exists to produce.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A decompressed buffer did not reproduce the original.
    #[error("Buffer mismatch: {size} byte round trip did not reproduce input")]
    BufferMismatch {
        /// Buffer size in bytes.
        size: usize,
    },
    /// A key read back differs from the synthesized key at its index.
    #[error("Key mismatch at record {index}: expected {expected:?}, got {actual:?}")]
    KeyMismatch {
        /// Record index, counting from zero.
        index: u64,
        /// Expected key.
        expected: String,
        /// Key actually read.
        actual: String,
    },
    /// A value read back differs from the synthesized value at its index.
    #[error("Value mismatch at record {index}: expected {expected:?}, got {actual:?}")]
    ValueMismatch {
        /// Record index, counting from zero.
        index: u64,
        /// Expected value.
        expected: String,
        /// Value actually read.
        actual: String,
    },
    /// The total record count diverged from the expected count.
    #[error("Lines mismatch: expected {expected}, read {actual}")]
    LineCount {
        /// Expected record count.
        expected: u64,
        /// Records actually read.
        actual: u64,
    },
}

/// Benchmark errors. A case either fully passes or surfaces the first of
/// these; there are no retries and no partial success.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// Codec identifier could not be resolved.
    #[error("Resolution error: {0}")]
    Resolve(#[from] ResolveError),
    /// A round-tripped value did not equal its original.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    /// Codec failure outside the store.
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
    /// Store open/read/write/close failure.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
