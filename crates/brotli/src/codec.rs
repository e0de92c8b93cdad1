//! Brotli codec implementation.

use std::io::Cursor;

use cascade_codec::{Codec, CodecConfig, CodecError};

/// A codec using the Brotli algorithm.
///
/// Brotli provides excellent compression ratios for text-like data such as
/// the synthesized key/value records the benchmark writes. Levels range
/// from 1 to 11; the window size is given as log2 of the window in bytes.
#[derive(Debug, Clone)]
pub struct BrotliCodec {
    config: CodecConfig,
}

impl BrotliCodec {
    /// Create a new Brotli codec with the given configuration.
    pub const fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Maximum compression: level 11 with a 4MB window.
    pub const fn best() -> Self {
        Self::new(CodecConfig { level: 11, window_size: 22 })
    }

    /// Fast compression: level 1.
    pub const fn fast() -> Self {
        Self::new(CodecConfig { level: 1, window_size: 22 })
    }

    /// Balanced compression: level 6.
    pub const fn balanced() -> Self {
        Self::new(CodecConfig { level: 6, window_size: 22 })
    }

    /// Get the codec configuration.
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }
}

impl Default for BrotliCodec {
    fn default() -> Self {
        Self::balanced()
    }
}

impl Codec for BrotliCodec {
    fn name(&self) -> &'static str {
        "brotli"
    }

    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        let mut output = Vec::new();
        let params = brotli::enc::BrotliEncoderParams {
            quality: self.config.level as i32,
            lgwin: self.config.window_size as i32,
            ..Default::default()
        };

        brotli::BrotliCompress(&mut Cursor::new(data), &mut output, &params)
            .map_err(|e| CodecError::Failed(e.to_string()))?;

        Ok(output)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        let mut output = Vec::new();
        brotli::BrotliDecompress(&mut Cursor::new(data), &mut output)
            .map_err(|_| CodecError::Corrupted)?;
        Ok(output)
    }
}
