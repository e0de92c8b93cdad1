//! Round-trip benchmark runner.

use std::{
    fs,
    path::{Path, PathBuf},
};

use cascade_brotli::BrotliCodec;
use cascade_codec::{Codec, CodecRegistry, NoopCodec};
use cascade_snappy::SnappyCodec;
use cascade_store::{RecordReader, RecordWriter, StoreConfig};
use cascade_zlib::ZlibCodec;
use cascade_zstd::ZstdCodec;
use tracing::{info, warn};

use crate::{
    BenchError, RawCaseReport, StoreCase, StoreCaseReport, TimingSample, ValidationError,
    synth::{record_at, synth_buffer},
};

/// Registry with every built-in codec registered under its name.
pub fn default_registry() -> CodecRegistry {
    let mut registry = CodecRegistry::new();
    registry.register("snappy", || Box::new(SnappyCodec::new()));
    registry.register("brotli", || Box::new(BrotliCodec::default()));
    registry.register("zlib", || Box::new(ZlibCodec::default()));
    registry.register("zstd", || Box::new(ZstdCodec::default()));
    registry.register("noop", || Box::new(NoopCodec::new()));
    registry
}

/// Drives correctness-checked, timed round trips through a codec.
///
/// Two levels: raw buffers (compress, decompress, compare), and the
/// record store (write records, read them back in order, verify each pair
/// and the total count). Cases run sequentially; the first failure aborts
/// the case and propagates, with no retries and no partial success.
#[derive(Debug)]
pub struct BenchmarkRunner {
    registry: CodecRegistry,
    work_dir: PathBuf,
}

impl BenchmarkRunner {
    /// Create a runner resolving codecs from `registry` and placing
    /// transient store files under `work_dir`.
    pub fn new(registry: CodecRegistry, work_dir: impl Into<PathBuf>) -> Self {
        Self { registry, work_dir: work_dir.into() }
    }

    /// The codec registry.
    pub const fn registry(&self) -> &CodecRegistry {
        &self.registry
    }

    /// Compress and decompress one synthesized buffer of `size` bytes,
    /// requiring byte-for-byte equality with the original.
    pub fn compress_decompress_loop(
        codec: &dyn Codec,
        size: usize,
    ) -> Result<RawCaseReport, BenchError> {
        let original = synth_buffer(size);

        let sw = TimingSample::start();
        let compressed = codec.compress(&original)?;
        let compress_time = sw.elapsed();

        let sw = TimingSample::start();
        let roundtripped = codec.decompress(&compressed)?;
        let decompress_time = sw.elapsed();

        if roundtripped != original {
            return Err(ValidationError::BufferMismatch { size }.into());
        }

        Ok(RawCaseReport { size, compressed_size: compressed.len(), compress_time, decompress_time })
    }

    /// Run the compress/decompress loop once per buffer size.
    pub fn raw_round_trip(
        &self,
        codec_id: &str,
        sizes: &[usize],
    ) -> Result<Vec<RawCaseReport>, BenchError> {
        let codec = self.registry.resolve(codec_id)?;

        let mut reports = Vec::with_capacity(sizes.len());
        for &size in sizes {
            let report = Self::compress_decompress_loop(codec.as_ref(), size)?;
            info!(
                codec = codec_id,
                size,
                compressed = report.compressed_size,
                compress_ms = report.compress_time.as_millis() as u64,
                decompress_ms = report.decompress_time.as_millis() as u64,
                "Raw round trip ok"
            );
            reports.push(report);
        }
        Ok(reports)
    }

    /// Write, read back, verify, and clean up one record store:
    /// WRITE → READ → VERIFY → CLEANUP, strictly ordered.
    pub fn store_round_trip(&self, case: &StoreCase) -> Result<StoreCaseReport, BenchError> {
        // Resolution happens before any file is created.
        let codec = self.registry.resolve(&case.codec)?;
        let path = self.store_path(&case.codec);

        info!(codec = %case.codec, path = %path.display(), "Writing record store");
        let sw = TimingSample::start();
        let mut writer =
            RecordWriter::create(&path, codec, StoreConfig { block_size: case.block_size })?;
        for i in 0..case.lines {
            let (key, value) = record_at(i);
            writer.append(key.as_bytes(), value.as_bytes())?;
        }
        writer.finish()?;
        let write_time = sw.elapsed();
        info!(lines = case.lines, elapsed_ms = write_time.as_millis() as u64, "Write phase done");

        info!(path = %path.display(), "Reading record store back");
        let sw = TimingSample::start();
        self.verify_store(&path, case.lines)?;
        let read_time = sw.elapsed();
        info!(lines = case.lines, elapsed_ms = read_time.as_millis() as u64, "Read phase done");

        let file_size = fs::metadata(&path).map_err(cascade_store::StoreError::Io)?.len();
        info!(file_size, "Store file size");

        // Best-effort cleanup: a failed delete never overturns the verdict.
        let cleanup_warning = match fs::remove_file(&path) {
            Ok(()) => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to delete store file");
                Some(format!("failed to delete {}: {e}", path.display()))
            }
        };

        Ok(StoreCaseReport {
            codec: case.codec.clone(),
            lines: case.lines,
            block_size: case.block_size,
            write_time,
            read_time,
            file_size,
            cleanup_warning,
        })
    }

    /// Transient store path for a codec, fixed per identifier.
    pub fn store_path(&self, codec_id: &str) -> PathBuf {
        self.work_dir.join(format!("store-roundtrip.{codec_id}"))
    }

    /// Read the store back, checking every record against its synthesized
    /// original and the final count against `lines`. The reader is
    /// released on every exit path, including validation failures.
    fn verify_store(&self, path: &Path, lines: u64) -> Result<(), BenchError> {
        let mut reader = RecordReader::open(path, &self.registry)?;

        let mut count = 0u64;
        while let Some((key, value)) = reader.next()? {
            let (expected_key, expected_value) = record_at(count);
            if key != expected_key.as_bytes() {
                return Err(ValidationError::KeyMismatch {
                    index: count,
                    expected: expected_key,
                    actual: String::from_utf8_lossy(&key).into_owned(),
                }
                .into());
            }
            if value != expected_value.as_bytes() {
                return Err(ValidationError::ValueMismatch {
                    index: count,
                    expected: expected_value,
                    actual: String::from_utf8_lossy(&value).into_owned(),
                }
                .into());
            }
            count += 1;
        }

        if count != lines {
            return Err(ValidationError::LineCount { expected: lines, actual: count }.into());
        }
        Ok(())
    }
}
