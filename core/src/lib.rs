//! squash-core
//!
//! Uniform compression over ZSTD, LZ4, Snappy and Brotli, plus a flat
//! length-prefixed archive for compressing whole directories.
//! No Python, no FFI bindings of its own.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Codecs and container
pub mod archive;
pub mod compression;
pub mod telemetry;

// File-level operations
pub mod ops;

pub use archive::{decode_archive, serialize_directory, ArchiveEntry, ArchiveError};
pub use compression::{compress, decompress, Algorithm, CompressionError};
pub use ops::{compress_directory, compress_file, decompress_file, CompressParams, DecompressParams};
pub use telemetry::OperationReport;
pub use types::{InputError, OpsError};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::archive::{
        decode_archive, serialize_directory, ArchiveEntry, ArchiveError, ArchiveReader,
    };
    pub use crate::compression::{compress, decompress, Algorithm, CompressionError};
    pub use crate::ops::{
        compress_directory, compress_directory_with_report, compress_file,
        compress_file_with_report, decompress_file, decompress_file_with_report, CompressParams,
        DecompressParams,
    };
    pub use crate::telemetry::{OperationReport, Stage};
    pub use crate::types::{InputError, OpsError};
}
