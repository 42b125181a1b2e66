use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::{archive::ArchiveError, compression::CompressionError};

/// Caller supplied a path that cannot be used.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("not a regular file: {}", .path.display())]
    NotAFile { path: PathBuf },
}

/// Unified error for the file-level operations.
/// - `From<T>` impls enable `?` across codec, archive and I/O layers.
/// - No variant is ever recovered from locally; every failure reaches the caller.
#[derive(Debug, Error)]
pub enum OpsError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("compression error: {0}")]
    Compression(#[from] CompressionError),

    #[error("archive error: {0}")]
    Archive(ArchiveError),
}

impl From<ArchiveError> for OpsError {
    fn from(e: ArchiveError) -> Self {
        // Bad roots surface as InvalidInput, not as an archive failure.
        match e {
            ArchiveError::InvalidInput(input) => OpsError::InvalidInput(input),
            other => OpsError::Archive(other),
        }
    }
}

impl OpsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        OpsError::Io { path: path.into(), source }
    }
}
