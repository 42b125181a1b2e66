pub use crate::compression::constants::DEFAULT_LEVEL;

/// Suffix used when decompressing without an explicit output path.
pub const DECOMPRESSED_SUFFIX: &str = ".decompressed";

/// Inserted between a directory name and the algorithm extension.
pub const ARCHIVE_INFIX: &str = ".archive";
