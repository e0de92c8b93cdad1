//! Compression codec trait and types.

/// Codec configuration.
#[derive(Clone, Debug)]
pub struct CodecConfig {
    /// Compression level (codec-specific range).
    pub level: u32,
    /// Log2 of window size (ignored by codecs without a window).
    pub window_size: u32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            level: 6,        // Balanced compression
            window_size: 22, // 4MB window
        }
    }
}

/// Codec errors.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Compression failed.
    #[error("Compression failed: {0}")]
    Failed(String),
    /// Decompression failed due to corrupted input.
    #[error("Decompression failed: corrupted data")]
    Corrupted,
}

/// A paired compress/decompress capability.
///
/// Implementations:
/// - `SnappyCodec`: Snappy block format (the benchmark default)
/// - `BrotliCodec`, `ZlibCodec`, `ZstdCodec`: alternative algorithms
/// - `NoopCodec`: passthrough for baselining
pub trait Codec: Send + Sync + std::fmt::Debug {
    /// Identifier this codec resolves under. Also stamped into record
    /// store headers so a reader can resolve the same codec.
    fn name(&self) -> &'static str;

    /// Compress data. Must be deterministic.
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError>;

    /// Decompress data. Must roundtrip with compress.
    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError>;
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn codec_config_default() {
        let config = CodecConfig::default();
        assert_eq!(config.level, 6);
        assert_eq!(config.window_size, 22);
    }

    #[rstest]
    #[case(1, 20, "minimum compression")]
    #[case(6, 22, "medium compression")]
    #[case(11, 24, "large window")]
    fn codec_config_custom(#[case] level: u32, #[case] window_size: u32, #[case] _description: &str) {
        let config = CodecConfig { level, window_size };
        assert_eq!(config.level, level);
        assert_eq!(config.window_size, window_size);
    }

    #[test]
    fn codec_config_clone() {
        let config = CodecConfig { level: 9, window_size: 20 };
        let cloned = config.clone();
        assert_eq!(cloned.level, config.level);
        assert_eq!(cloned.window_size, config.window_size);
    }

    #[rstest]
    #[case("io error", "Compression failed: io error")]
    #[case("buffer overflow", "Compression failed: buffer overflow")]
    #[case("", "Compression failed: ")]
    fn codec_error_failed_display(#[case] msg: &str, #[case] expected: &str) {
        let err = CodecError::Failed(msg.to_string());
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn codec_error_corrupted_display() {
        let err = CodecError::Corrupted;
        assert_eq!(err.to_string(), "Decompression failed: corrupted data");
    }

    #[rstest]
    #[case(CodecError::Failed("test".into()))]
    #[case(CodecError::Corrupted)]
    fn codec_error_variants_are_debug(#[case] err: CodecError) {
        let _ = format!("{:?}", err);
    }
}
