//! archive/types.rs
//! Archive entry and error types.
//!
//! Record layout (all integers big-endian):
//!
//! ```text
//! [u32 path_len][path_len bytes UTF-8 path][u32 content_len][content_len bytes]
//! ```
//!
//! Records are concatenated with no header, count, trailer or checksum.
//! Directories have no record of their own.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::InputError;

/// Size of each of the two length fields in a record.
pub const RECORD_LEN_FIELD: usize = 4;

/// One regular file captured from the archive root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path relative to the archive root, platform separators.
    pub relative_path: String,
    pub content: Vec<u8>,
}

impl ArchiveEntry {
    pub fn new(relative_path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self { relative_path: relative_path.into(), content: content.into() }
    }

    /// Encoded size of this entry's record.
    pub fn record_len(&self) -> usize {
        2 * RECORD_LEN_FIELD + self.relative_path.len() + self.content.len()
    }
}

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("entry {path} is {len} bytes, too large for a 32-bit length field")]
    EntryTooLarge { path: String, len: usize },

    #[error("archive truncated at offset {offset}: need {need} bytes, have {have}")]
    Truncated { offset: usize, need: usize, have: usize },

    #[error("archive entry path at offset {offset} is not valid UTF-8")]
    InvalidPath { offset: usize },
}

impl ArchiveError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ArchiveError::Io { path: path.into(), source }
    }
}
