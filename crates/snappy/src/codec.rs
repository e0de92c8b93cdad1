//! Snappy codec implementation.

use cascade_codec::{Codec, CodecError};

/// A codec using the Snappy algorithm (raw block format).
///
/// Snappy trades compression ratio for speed: it compresses and
/// decompresses an order of magnitude faster than the entropy coders at
/// roughly half their ratio. There are no tunable levels.
#[derive(Debug, Clone, Default)]
pub struct SnappyCodec;

impl SnappyCodec {
    /// Create a new Snappy codec.
    pub const fn new() -> Self {
        Self
    }
}

impl Codec for SnappyCodec {
    fn name(&self) -> &'static str {
        "snappy"
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        snap::raw::Encoder::new()
            .compress_vec(data)
            .map_err(|e| CodecError::Failed(e.to_string()))
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        snap::raw::Decoder::new().decompress_vec(data).map_err(|_| CodecError::Corrupted)
    }
}
