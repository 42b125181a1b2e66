//! compression/registry.rs
//! Static codec registry and algorithm metadata.

use crate::compression::codecs::{BrotliCodec, Lz4Codec, SnappyCodec, ZstdCodec};
use crate::compression::constants::{
    BROTLI_MAX_QUALITY, BROTLI_MIN_QUALITY, DEFAULT_LEVEL, ZSTD_MAX_LEVEL, ZSTD_MIN_LEVEL,
};
use crate::compression::types::{Algorithm, Codec, CompressionError};

static ZSTD: ZstdCodec = ZstdCodec;
static LZ4: Lz4Codec = Lz4Codec;
static SNAPPY: SnappyCodec = SnappyCodec;
static BROTLI: BrotliCodec = BrotliCodec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecInfo {
    pub algorithm: Algorithm,
    pub name: &'static str,
    pub tag: &'static str,
    /// Inclusive level range, `None` when the codec has no level concept.
    pub level_range: Option<(i32, i32)>,
    pub default_level: i32,
    /// False when frames carry the 4-byte length prefix.
    pub self_describing: bool,
}

/// Shared codec instance for `algorithm`.
pub fn codec_for(algorithm: Algorithm) -> &'static dyn Codec {
    match algorithm {
        Algorithm::Zstd   => &ZSTD,
        Algorithm::Lz4    => &LZ4,
        Algorithm::Snappy => &SNAPPY,
        Algorithm::Brotli => &BROTLI,
    }
}

pub fn codec_info(algorithm: Algorithm) -> CodecInfo {
    let level_range = match algorithm {
        Algorithm::Zstd   => Some((ZSTD_MIN_LEVEL, ZSTD_MAX_LEVEL)),
        Algorithm::Brotli => Some((BROTLI_MIN_QUALITY, BROTLI_MAX_QUALITY)),
        Algorithm::Lz4 | Algorithm::Snappy => None,
    };

    CodecInfo {
        algorithm,
        name: algorithm.display_name(),
        tag: algorithm.tag(),
        level_range,
        default_level: if level_range.is_some() { DEFAULT_LEVEL } else { 0 },
        self_describing: !codec_for(algorithm).needs_length_prefix(),
    }
}

/// Resolve a raw algorithm id.
pub fn resolve(raw: u8) -> Result<CodecInfo, CompressionError> {
    Algorithm::from_id(raw).map(codec_info)
}
