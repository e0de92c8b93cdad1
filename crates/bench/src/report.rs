//! Phase timing and benchmark reports.

use std::{
    path::Path,
    time::{Duration, Instant},
};

use serde::{Deserialize, Serialize};

/// Monotonic stopwatch bracketing one benchmark phase.
///
/// Elapsed time is wall-clock, reported for observation only; it never
/// feeds a pass/fail decision.
#[derive(Clone, Copy, Debug)]
pub struct TimingSample {
    start: Instant,
}

impl TimingSample {
    /// Start timing now.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Elapsed wall-clock time since start.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Result of one raw buffer round trip.
#[derive(Clone, Debug)]
pub struct RawCaseReport {
    /// Buffer size in bytes.
    pub size: usize,
    /// Compressed size in bytes.
    pub compressed_size: usize,
    /// Time spent compressing.
    pub compress_time: Duration,
    /// Time spent decompressing.
    pub decompress_time: Duration,
}

/// Result of one store round trip.
#[derive(Clone, Debug)]
pub struct StoreCaseReport {
    /// Codec identifier.
    pub codec: String,
    /// Records written and verified.
    pub lines: u64,
    /// Compression block size in bytes.
    pub block_size: usize,
    /// Write phase wall time.
    pub write_time: Duration,
    /// Read phase wall time.
    pub read_time: Duration,
    /// On-disk size of the store file before cleanup.
    pub file_size: u64,
    /// Set when deleting the transient store file failed. Non-fatal: the
    /// correctness verdict stands.
    pub cleanup_warning: Option<String>,
}

/// JSON mirror of [`RawCaseReport`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRawCase {
    /// Buffer size in bytes.
    pub size: usize,
    /// Compressed size in bytes.
    pub compressed_size: usize,
    /// Compression wall time in milliseconds.
    pub compress_ms: f64,
    /// Decompression wall time in milliseconds.
    pub decompress_ms: f64,
}

impl From<&RawCaseReport> for JsonRawCase {
    fn from(report: &RawCaseReport) -> Self {
        Self {
            size: report.size,
            compressed_size: report.compressed_size,
            compress_ms: to_millis(report.compress_time),
            decompress_ms: to_millis(report.decompress_time),
        }
    }
}

/// JSON mirror of [`StoreCaseReport`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonStoreCase {
    /// Codec identifier.
    pub codec: String,
    /// Records written and verified.
    pub lines: u64,
    /// Compression block size in bytes.
    pub block_size: usize,
    /// Write phase wall time in milliseconds.
    pub write_ms: f64,
    /// Read phase wall time in milliseconds.
    pub read_ms: f64,
    /// On-disk size of the store file before cleanup.
    pub file_size: u64,
    /// Cleanup warning, if deleting the store file failed.
    pub cleanup_warning: Option<String>,
}

impl From<&StoreCaseReport> for JsonStoreCase {
    fn from(report: &StoreCaseReport) -> Self {
        Self {
            codec: report.codec.clone(),
            lines: report.lines,
            block_size: report.block_size,
            write_ms: to_millis(report.write_time),
            read_ms: to_millis(report.read_time),
            file_size: report.file_size,
            cleanup_warning: report.cleanup_warning.clone(),
        }
    }
}

/// JSON report collecting every case run in one invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonReport {
    /// Raw buffer cases.
    pub raw: Vec<JsonRawCase>,
    /// Store round-trip cases.
    pub store: Vec<JsonStoreCase>,
}

impl JsonReport {
    /// Append raw case results.
    pub fn add_raw(&mut self, reports: &[RawCaseReport]) {
        self.raw.extend(reports.iter().map(JsonRawCase::from));
    }

    /// Append one store case result.
    pub fn add_store(&mut self, report: &StoreCaseReport) {
        self.store.push(JsonStoreCase::from(report));
    }

    /// Serialize to pretty JSON and write to `path`.
    pub fn write(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }
}

fn to_millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn timing_sample_elapsed_is_monotonic() {
        let sw = TimingSample::start();
        let first = sw.elapsed();
        let second = sw.elapsed();
        assert!(second >= first);
    }

    #[rstest]
    #[case(Duration::from_millis(1500), 1500.0)]
    #[case(Duration::from_micros(250), 0.25)]
    #[case(Duration::ZERO, 0.0)]
    fn to_millis_conversion(#[case] duration: Duration, #[case] expected: f64) {
        assert_eq!(to_millis(duration), expected);
    }

    #[test]
    fn json_raw_case_from_report() {
        let report = RawCaseReport {
            size: 4096,
            compressed_size: 512,
            compress_time: Duration::from_millis(3),
            decompress_time: Duration::from_millis(1),
        };
        let json = JsonRawCase::from(&report);
        assert_eq!(json.size, 4096);
        assert_eq!(json.compressed_size, 512);
        assert_eq!(json.compress_ms, 3.0);
        assert_eq!(json.decompress_ms, 1.0);
    }

    #[test]
    fn json_store_case_from_report() {
        let report = StoreCaseReport {
            codec: "snappy".to_string(),
            lines: 1000,
            block_size: 500,
            write_time: Duration::from_millis(20),
            read_time: Duration::from_millis(10),
            file_size: 12345,
            cleanup_warning: None,
        };
        let json = JsonStoreCase::from(&report);
        assert_eq!(json.codec, "snappy");
        assert_eq!(json.lines, 1000);
        assert_eq!(json.block_size, 500);
        assert_eq!(json.write_ms, 20.0);
        assert_eq!(json.read_ms, 10.0);
        assert_eq!(json.file_size, 12345);
        assert!(json.cleanup_warning.is_none());
    }

    #[test]
    fn json_report_roundtrips_through_serde() {
        let mut report = JsonReport::default();
        report.add_raw(&[RawCaseReport {
            size: 4096,
            compressed_size: 100,
            compress_time: Duration::from_millis(1),
            decompress_time: Duration::from_millis(1),
        }]);
        report.add_store(&StoreCaseReport {
            codec: "noop".to_string(),
            lines: 10,
            block_size: 100,
            write_time: Duration::ZERO,
            read_time: Duration::ZERO,
            file_size: 1,
            cleanup_warning: Some("left behind".to_string()),
        });

        let json = serde_json::to_string(&report).unwrap();
        let parsed: JsonReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.raw.len(), 1);
        assert_eq!(parsed.store.len(), 1);
        assert_eq!(parsed.store[0].cleanup_warning.as_deref(), Some("left behind"));
    }

    #[test]
    fn json_report_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        let report = JsonReport::default();
        report.write(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"raw\""));
        assert!(contents.contains("\"store\""));
    }
}
