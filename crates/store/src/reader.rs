//! Record store reader.

use std::{
    collections::VecDeque,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use cascade_codec::{Codec, CodecRegistry};
use tracing::trace;

use crate::{
    StoreError,
    format::{BLOCK_FRAME_LEN, StoreHeader},
};

/// Reads records from a store file, strictly in write order.
///
/// The codec is resolved from the file header through the registry the
/// caller supplies. One compressed block is decoded at a time; records are
/// handed out from the decoded block until it drains, then the next block
/// is read. Dropping the reader releases the file handle on every exit
/// path, including a caller bailing out mid-loop.
pub struct RecordReader {
    file: BufReader<File>,
    codec: Box<dyn Codec>,
    header: StoreHeader,
    block: VecDeque<(Vec<u8>, Vec<u8>)>,
    offset: u64,
    records_read: u64,
}

impl RecordReader {
    /// Open a store file, reading its header and resolving its codec.
    pub fn open(path: impl AsRef<Path>, registry: &CodecRegistry) -> Result<Self, StoreError> {
        let mut file = BufReader::new(File::open(path)?);
        let header = StoreHeader::read_from(&mut file)?;
        let codec = registry.resolve(&header.codec)?;
        let offset = header.encoded_len();

        Ok(Self { file, codec, header, block: VecDeque::new(), offset, records_read: 0 })
    }

    /// Codec identifier stamped in the file header.
    pub fn codec(&self) -> &str {
        &self.header.codec
    }

    /// Number of records returned so far.
    pub const fn records_read(&self) -> u64 {
        self.records_read
    }

    /// Read the next record. Returns `None` at end of stream.
    pub fn next(&mut self) -> Result<Option<(Vec<u8>, Vec<u8>)>, StoreError> {
        if self.block.is_empty() {
            self.read_block()?;
        }
        match self.block.pop_front() {
            Some(record) => {
                self.records_read += 1;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    /// Read and decode the next block, if any.
    fn read_block(&mut self) -> Result<(), StoreError> {
        let mut frame = [0u8; BLOCK_FRAME_LEN];
        if !self.fill(&mut frame)? {
            return Ok(()); // clean end of stream
        }

        let record_count = u32::from_le_bytes([frame[0], frame[1], frame[2], frame[3]]);
        let raw_len = u32::from_le_bytes([frame[4], frame[5], frame[6], frame[7]]);
        let compressed_len = u32::from_le_bytes([frame[8], frame[9], frame[10], frame[11]]);

        let mut compressed = vec![0u8; compressed_len as usize];
        if !self.fill(&mut compressed)? {
            return Err(StoreError::Truncated(self.offset));
        }

        let raw = self.codec.decompress(&compressed)?;
        if raw.len() != raw_len as usize {
            return Err(StoreError::Corrupt(format!(
                "block decompressed to {} bytes, header says {}",
                raw.len(),
                raw_len
            )));
        }

        let mut pos = 0usize;
        for _ in 0..record_count {
            let key = read_field(&raw, &mut pos)?;
            let value = read_field(&raw, &mut pos)?;
            self.block.push_back((key, value));
        }
        if pos != raw.len() {
            return Err(StoreError::Corrupt(format!(
                "block has {} trailing bytes after {} records",
                raw.len() - pos,
                record_count
            )));
        }

        trace!(records = record_count, raw = raw_len, compressed = compressed_len, "Read block");
        Ok(())
    }

    /// Read exactly `buf.len()` bytes. Returns `false` on a clean end of
    /// stream before the first byte; a partial read is a truncation error.
    fn fill(&mut self, buf: &mut [u8]) -> Result<bool, StoreError> {
        let mut filled = 0;
        while filled < buf.len() {
            let n = self.file.read(&mut buf[filled..])?;
            if n == 0 {
                if filled == 0 {
                    return Ok(false);
                }
                return Err(StoreError::Truncated(self.offset + filled as u64));
            }
            filled += n;
        }
        self.offset += buf.len() as u64;
        Ok(true)
    }
}

impl std::fmt::Debug for RecordReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordReader")
            .field("codec", &self.header.codec)
            .field("records_read", &self.records_read)
            .finish()
    }
}

/// Decode one length-prefixed field from a block payload.
fn read_field(raw: &[u8], pos: &mut usize) -> Result<Vec<u8>, StoreError> {
    let Some(prefix) = raw.get(*pos..*pos + 4) else {
        return Err(StoreError::Corrupt("record length past block end".to_string()));
    };
    let len = u32::from_le_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]) as usize;
    *pos += 4;

    let Some(field) = raw.get(*pos..*pos + len) else {
        return Err(StoreError::Corrupt("record data past block end".to_string()));
    };
    *pos += len;
    Ok(field.to_vec())
}
