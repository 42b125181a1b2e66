//! src/archive/decode.rs
//!
//! Archive stream reader.
//!
//! Mirrors `encode.rs` exactly: records are read until the buffer is
//! exhausted. There is no checksum, so corruption is only detected when a
//! length field runs past the end of the stream or a path is not UTF-8.

use byteorder::{BigEndian, ByteOrder};

use crate::archive::types::{ArchiveEntry, ArchiveError, RECORD_LEN_FIELD};

/// Borrowing iterator over the records of an archive stream.
pub struct ArchiveReader<'a> {
    buf: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> ArchiveReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0, failed: false }
    }

    fn take(&mut self, need: usize) -> Result<&'a [u8], ArchiveError> {
        let have = self.buf.len() - self.pos;
        if have < need {
            return Err(ArchiveError::Truncated { offset: self.pos, need, have });
        }
        let slice = &self.buf[self.pos..self.pos + need];
        self.pos += need;
        Ok(slice)
    }

    fn take_u32(&mut self) -> Result<usize, ArchiveError> {
        self.take(RECORD_LEN_FIELD).map(|b| BigEndian::read_u32(b) as usize)
    }

    fn read_record(&mut self) -> Result<ArchiveEntry, ArchiveError> {
        let path_len = self.take_u32()?;
        let path_offset = self.pos;
        let path = self.take(path_len)?;
        let relative_path = std::str::from_utf8(path)
            .map_err(|_| ArchiveError::InvalidPath { offset: path_offset })?
            .to_owned();

        let content_len = self.take_u32()?;
        let content = self.take(content_len)?.to_vec();

        Ok(ArchiveEntry { relative_path, content })
    }
}

impl<'a> Iterator for ArchiveReader<'a> {
    type Item = Result<ArchiveEntry, ArchiveError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.buf.len() {
            return None;
        }
        let record = self.read_record();
        self.failed = record.is_err();
        Some(record)
    }
}

/// Parse a complete archive stream.
pub fn decode_archive(buf: &[u8]) -> Result<Vec<ArchiveEntry>, ArchiveError> {
    ArchiveReader::new(buf).collect()
}
