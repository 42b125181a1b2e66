//! compression/constants.rs
//! Stable algorithm IDs, level bounds and frame constants.

/// Stable algorithm IDs (u8) used by `Algorithm` and `registry::resolve`.
pub mod codec_ids {
    pub const ZSTD: u8   = 0x01;
    pub const LZ4: u8    = 0x02;
    pub const SNAPPY: u8 = 0x03;
    pub const BROTLI: u8 = 0x04;
}

/// Default level for every operation (meaningful for zstd and brotli only).
pub const DEFAULT_LEVEL: i32 = 3;

/// Zstd level range advertised by the registry. Not enforced: out-of-range
/// levels go straight to libzstd.
pub const ZSTD_MIN_LEVEL: i32 = 1;
pub const ZSTD_MAX_LEVEL: i32 = 22;

/// Brotli quality bounds; levels are clamped into this range.
pub const BROTLI_MIN_QUALITY: i32 = 0;
pub const BROTLI_MAX_QUALITY: i32 = 11;

/// Size of the big-endian original-length prefix on LZ4 frames.
pub const LENGTH_PREFIX_LEN: usize = 4;

/// Largest buffer a `Vec<u8>` can hold on this platform.
pub const MAX_BUFFER_LEN: u64 = isize::MAX as u64;

/// Most output one input byte can produce in each format. A declared
/// decompressed size above `input_len * factor` cannot come from a valid frame.
pub const ZSTD_MAX_EXPANSION: usize = 32 * 1024; // 128 KiB RLE block from 4 bytes
pub const LZ4_MAX_EXPANSION: usize = 255;
pub const SNAPPY_MAX_EXPANSION: usize = 32;
