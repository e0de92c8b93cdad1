//! Noop codec implementation for testing and benchmarking.

use crate::{Codec, CodecError};

/// A no-operation codec that passes data through unchanged.
///
/// Useful for measuring store and harness overhead without compression
/// cost, or for debugging to see the raw block payloads.
#[derive(Debug, Clone, Default)]
pub struct NoopCodec;

impl NoopCodec {
    /// Create a new noop codec.
    pub const fn new() -> Self {
        Self
    }
}

impl Codec for NoopCodec {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        Ok(data.to_vec())
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        Ok(data.to_vec())
    }
}
