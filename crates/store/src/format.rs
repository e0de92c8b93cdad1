//! Store wire format: header layout and framing constants.

use std::io::{Read, Write};

use crate::StoreError;

/// File magic, first four bytes of every store file.
pub(crate) const MAGIC: [u8; 4] = *b"CSEQ";

/// Current format version.
pub(crate) const VERSION: u8 = 1;

/// Block frame prefix: record count, raw length, compressed length.
pub(crate) const BLOCK_FRAME_LEN: usize = 12;

/// Store file header.
///
/// Identifies the format and names the codec the file was written with, so
/// a reader can resolve the same codec without out-of-band configuration.
#[derive(Clone, Debug)]
pub struct StoreHeader {
    /// Format version.
    pub version: u8,
    /// Codec identifier.
    pub codec: String,
}

impl StoreHeader {
    /// Encoded header length in bytes.
    pub fn encoded_len(&self) -> u64 {
        (MAGIC.len() + 1 + 1 + self.codec.len()) as u64
    }

    pub(crate) fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), StoreError> {
        debug_assert!(self.codec.len() <= u8::MAX as usize);
        writer.write_all(&MAGIC)?;
        writer.write_all(&[self.version])?;
        writer.write_all(&[self.codec.len() as u8])?;
        writer.write_all(self.codec.as_bytes())?;
        Ok(())
    }

    pub(crate) fn read_from<R: Read>(reader: &mut R) -> Result<Self, StoreError> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if magic != MAGIC {
            return Err(StoreError::BadMagic);
        }

        let mut version = [0u8; 1];
        reader.read_exact(&mut version)?;
        let version = version[0];
        if version != VERSION {
            return Err(StoreError::UnsupportedVersion(version));
        }

        let mut codec_len = [0u8; 1];
        reader.read_exact(&mut codec_len)?;
        let mut codec = vec![0u8; codec_len[0] as usize];
        reader.read_exact(&mut codec)?;
        let codec = String::from_utf8(codec)
            .map_err(|_| StoreError::Corrupt("codec id is not UTF-8".to_string()))?;

        Ok(Self { version, codec })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("snappy")]
    #[case("noop")]
    #[case("a")]
    fn header_roundtrip(#[case] codec: &str) {
        let header = StoreHeader { version: VERSION, codec: codec.to_string() };

        let mut encoded = Vec::new();
        header.write_to(&mut encoded).unwrap();
        assert_eq!(encoded.len() as u64, header.encoded_len());

        let decoded = StoreHeader::read_from(&mut Cursor::new(encoded)).unwrap();
        assert_eq!(decoded.version, VERSION);
        assert_eq!(decoded.codec, codec);
    }

    #[test]
    fn header_rejects_bad_magic() {
        let err = StoreHeader::read_from(&mut Cursor::new(b"JUNK\x01\x04noop")).unwrap_err();
        assert!(matches!(err, StoreError::BadMagic));
    }

    #[test]
    fn header_rejects_unsupported_version() {
        let err = StoreHeader::read_from(&mut Cursor::new(b"CSEQ\x07\x04noop")).unwrap_err();
        assert!(matches!(err, StoreError::UnsupportedVersion(7)));
    }

    #[test]
    fn header_rejects_non_utf8_codec_id() {
        let err = StoreHeader::read_from(&mut Cursor::new(b"CSEQ\x01\x02\xff\xfe")).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }

    #[test]
    fn header_truncated_is_io_error() {
        let err = StoreHeader::read_from(&mut Cursor::new(b"CS")).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[test]
    fn header_encoded_len_matches_layout() {
        let header = StoreHeader { version: VERSION, codec: "snappy".to_string() };
        // magic + version + id length + id bytes
        assert_eq!(header.encoded_len(), 4 + 1 + 1 + 6);
    }
}
