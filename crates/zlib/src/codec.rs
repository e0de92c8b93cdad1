//! Zlib codec implementation.

use std::io::{Read, Write};

use cascade_codec::{Codec, CodecConfig, CodecError};
use flate2::{Compression, read::ZlibDecoder, write::ZlibEncoder};

/// A codec using the Zlib (DEFLATE) algorithm.
///
/// Zlib supports compression levels 0-9: 1 is fastest, 6 is the common
/// default, 9 compresses hardest. The window size is fixed at 32KB
/// (log2 = 15) by the format.
#[derive(Debug, Clone)]
pub struct ZlibCodec {
    config: CodecConfig,
}

impl ZlibCodec {
    /// Create a new Zlib codec with the given configuration.
    pub const fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Maximum compression: level 9.
    pub const fn best() -> Self {
        Self::new(CodecConfig { level: 9, window_size: 15 })
    }

    /// Fast compression: level 1.
    pub const fn fast() -> Self {
        Self::new(CodecConfig { level: 1, window_size: 15 })
    }

    /// Balanced compression: level 6.
    pub const fn balanced() -> Self {
        Self::new(CodecConfig { level: 6, window_size: 15 })
    }

    /// Get the codec configuration.
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }
}

impl Default for ZlibCodec {
    fn default() -> Self {
        Self::balanced()
    }
}

impl Codec for ZlibCodec {
    fn name(&self) -> &'static str {
        "zlib"
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(self.config.level));
        encoder.write_all(data).map_err(|e| CodecError::Failed(e.to_string()))?;
        encoder.finish().map_err(|e| CodecError::Failed(e.to_string()))
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        let mut output = Vec::new();
        ZlibDecoder::new(data).read_to_end(&mut output).map_err(|_| CodecError::Corrupted)?;
        Ok(output)
    }
}
