//! Record store writer.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use cascade_codec::Codec;
use tracing::trace;

use crate::{
    StoreError,
    format::{StoreHeader, VERSION},
};

/// Default compression block size in bytes.
pub const DEFAULT_BLOCK_SIZE: usize = 1_000_000;

/// Writer configuration.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Uncompressed bytes buffered before a compression unit boundary.
    pub block_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { block_size: DEFAULT_BLOCK_SIZE }
    }
}

/// Appends key/value records to a store file, compressing in blocks.
///
/// Records accumulate in an in-memory buffer; once the buffer reaches the
/// configured block size it is compressed as one unit and framed out to
/// the file. [`RecordWriter::finish`] flushes the tail block. Dropping an
/// unfinished writer performs a best-effort flush so the file is released
/// on every exit path.
pub struct RecordWriter {
    file: BufWriter<File>,
    codec: Box<dyn Codec>,
    block_size: usize,
    buf: Vec<u8>,
    buffered_records: u32,
    records_written: u64,
    finished: bool,
}

impl RecordWriter {
    /// Create a store file at `path`, writing its header immediately.
    ///
    /// Fails with [`StoreError::InvalidBlockSize`] if the configured block
    /// size is zero, before any file is created.
    pub fn create(
        path: impl AsRef<Path>,
        codec: Box<dyn Codec>,
        config: StoreConfig,
    ) -> Result<Self, StoreError> {
        if config.block_size == 0 {
            return Err(StoreError::InvalidBlockSize);
        }

        let mut file = BufWriter::new(File::create(path)?);
        let header = StoreHeader { version: VERSION, codec: codec.name().to_string() };
        header.write_to(&mut file)?;

        Ok(Self {
            file,
            codec,
            block_size: config.block_size,
            buf: Vec::with_capacity(config.block_size),
            buffered_records: 0,
            records_written: 0,
            finished: false,
        })
    }

    /// Append one key/value record.
    pub fn append(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.buf.extend_from_slice(&(key.len() as u32).to_le_bytes());
        self.buf.extend_from_slice(key);
        self.buf.extend_from_slice(&(value.len() as u32).to_le_bytes());
        self.buf.extend_from_slice(value);
        self.buffered_records += 1;
        self.records_written += 1;

        if self.buf.len() >= self.block_size {
            self.flush_block()?;
        }
        Ok(())
    }

    /// Number of records appended so far.
    pub const fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Flush the tail block and the underlying file, consuming the writer.
    ///
    /// Returns the total number of records written.
    pub fn finish(mut self) -> Result<u64, StoreError> {
        self.flush_block()?;
        self.file.flush()?;
        self.finished = true;
        Ok(self.records_written)
    }

    fn flush_block(&mut self) -> Result<(), StoreError> {
        if self.buffered_records == 0 {
            return Ok(());
        }

        let compressed = self.codec.compress(&self.buf)?;
        self.file.write_all(&self.buffered_records.to_le_bytes())?;
        self.file.write_all(&(self.buf.len() as u32).to_le_bytes())?;
        self.file.write_all(&(compressed.len() as u32).to_le_bytes())?;
        self.file.write_all(&compressed)?;

        trace!(
            records = self.buffered_records,
            raw = self.buf.len(),
            compressed = compressed.len(),
            "Flushed block"
        );

        self.buf.clear();
        self.buffered_records = 0;
        Ok(())
    }
}

impl Drop for RecordWriter {
    fn drop(&mut self) {
        if !self.finished {
            let _ = self.flush_block();
            let _ = self.file.flush();
        }
    }
}

impl std::fmt::Debug for RecordWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordWriter")
            .field("codec", &self.codec.name())
            .field("block_size", &self.block_size)
            .field("records_written", &self.records_written)
            .finish()
    }
}
