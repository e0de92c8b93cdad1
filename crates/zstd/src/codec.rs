//! Zstandard codec implementation.

use cascade_codec::{Codec, CodecConfig, CodecError};

/// A codec using the Zstandard algorithm.
///
/// Levels 1-22; the window is chosen by the library so `window_size` is
/// unused here.
#[derive(Debug, Clone)]
pub struct ZstdCodec {
    config: CodecConfig,
}

impl ZstdCodec {
    /// Create a new Zstandard codec with the given configuration.
    pub const fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// High compression: level 19.
    pub const fn best() -> Self {
        Self::new(CodecConfig { level: 19, window_size: 0 })
    }

    /// Fast compression: level 1.
    pub const fn fast() -> Self {
        Self::new(CodecConfig { level: 1, window_size: 0 })
    }

    /// Balanced compression: level 3 (the zstd default).
    pub const fn balanced() -> Self {
        Self::new(CodecConfig { level: 3, window_size: 0 })
    }

    /// Get the codec configuration.
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }
}

impl Default for ZstdCodec {
    fn default() -> Self {
        Self::balanced()
    }
}

impl Codec for ZstdCodec {
    fn name(&self) -> &'static str {
        "zstd"
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        zstd::bulk::compress(data, self.config.level as i32)
            .map_err(|e| CodecError::Failed(e.to_string()))
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        zstd::stream::decode_all(data).map_err(|_| CodecError::Corrupted)
    }
}
