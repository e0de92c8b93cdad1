//! Benchmark case parameters.

pub use cascade_store::DEFAULT_BLOCK_SIZE;

/// Buffer sizes exercised by the raw round trip.
pub const RAW_SIZES: [usize; 4] = [4 * 1024, 64 * 1024, 128 * 1024, 1024 * 1024];

/// Default record count for the store round trip.
pub const DEFAULT_LINES: u64 = 100_000;

/// One store round-trip case.
#[derive(Clone, Debug)]
pub struct StoreCase {
    /// Number of key/value records to write and verify.
    pub lines: u64,
    /// Codec identifier, resolved through the registry.
    pub codec: String,
    /// Compression block size in bytes.
    pub block_size: usize,
}

impl StoreCase {
    /// Create a case with the default block size.
    pub fn new(codec: impl Into<String>, lines: u64) -> Self {
        Self { lines, codec: codec.into(), block_size: DEFAULT_BLOCK_SIZE }
    }

    /// Set the compression block size.
    pub const fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn raw_sizes_match_benchmark_list() {
        assert_eq!(RAW_SIZES, [4096, 65536, 131072, 1048576]);
    }

    #[test]
    fn store_case_new_uses_default_block_size() {
        let case = StoreCase::new("snappy", 1000);
        assert_eq!(case.codec, "snappy");
        assert_eq!(case.lines, 1000);
        assert_eq!(case.block_size, DEFAULT_BLOCK_SIZE);
    }

    #[rstest]
    #[case(1)]
    #[case(500)]
    #[case(1_000_000)]
    fn store_case_with_block_size(#[case] block_size: usize) {
        let case = StoreCase::new("zstd", 10).with_block_size(block_size);
        assert_eq!(case.block_size, block_size);
    }

    #[test]
    fn store_case_clone() {
        let case = StoreCase::new("noop", 42).with_block_size(7);
        let cloned = case.clone();
        assert_eq!(cloned.codec, case.codec);
        assert_eq!(cloned.lines, case.lines);
        assert_eq!(cloned.block_size, case.block_size);
    }
}
