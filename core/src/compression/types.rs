//! compression/types.rs
//! Algorithm identifiers, the `Codec` trait and codec-level errors.
use std::fmt;
use std::str::FromStr;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compression::constants::codec_ids;

/// Boxed underlying codec fault, kept as the `source` of encode/decode errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Closed set of supported algorithms.
#[repr(u8)]
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash,
    TryFromPrimitive, IntoPrimitive, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Zstd   = codec_ids::ZSTD,
    Lz4    = codec_ids::LZ4,
    Snappy = codec_ids::SNAPPY,
    Brotli = codec_ids::BROTLI,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Zstd,
        Algorithm::Lz4,
        Algorithm::Snappy,
        Algorithm::Brotli,
    ];

    /// Human-readable name used in log lines.
    pub const fn display_name(self) -> &'static str {
        match self {
            Algorithm::Zstd   => "Zstandard",
            Algorithm::Lz4    => "LZ4",
            Algorithm::Snappy => "Snappy",
            Algorithm::Brotli => "Brotli",
        }
    }

    /// Canonical lowercase tag, also the file extension without the dot.
    pub const fn tag(self) -> &'static str {
        match self {
            Algorithm::Zstd   => "zstd",
            Algorithm::Lz4    => "lz4",
            Algorithm::Snappy => "snappy",
            Algorithm::Brotli => "brotli",
        }
    }

    /// File extension including the leading dot, e.g. `.zstd`.
    pub fn extension(self) -> String {
        format!(".{}", self.tag())
    }

    /// Map a raw id back to an algorithm.
    pub fn from_id(raw: u8) -> Result<Self, CompressionError> {
        Algorithm::try_from(raw).map_err(|_| {
            CompressionError::Configuration(format!("unsupported compression algorithm id: 0x{raw:02x}"))
        })
    }

    pub fn id(self) -> u8 {
        self.into()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Algorithm {
    type Err = CompressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.tag().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CompressionError::Configuration(format!("unsupported compression algorithm: {wanted}")))
    }
}

#[derive(Debug, Error)]
pub enum CompressionError {
    /// Frame is shorter than the framing this system adds requires.
    #[error("malformed {algorithm} frame: {len} bytes, need at least {need}")]
    MalformedFrame { algorithm: Algorithm, len: usize, need: usize },

    /// Declared decompressed size is impossible for the frame or cannot be
    /// allocated. Nothing is decoded.
    #[error("declared decompressed size {declared} exceeds limit {max}")]
    SizeOverflow { declared: u64, max: u64 },

    #[error("{algorithm} compression failed (input {input_len} bytes): {source}")]
    EncodeFailure {
        algorithm: Algorithm,
        input_len: usize,
        #[source]
        source: BoxError,
    },

    #[error("{algorithm} decompression failed (input {input_len} bytes): {source}")]
    DecodeFailure {
        algorithm: Algorithm,
        input_len: usize,
        #[source]
        source: BoxError,
    },

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl CompressionError {
    pub fn encode(algorithm: Algorithm, input_len: usize, source: impl Into<BoxError>) -> Self {
        CompressionError::EncodeFailure { algorithm, input_len, source: source.into() }
    }

    pub fn decode(algorithm: Algorithm, input_len: usize, source: impl Into<BoxError>) -> Self {
        CompressionError::DecodeFailure { algorithm, input_len, source: source.into() }
    }
}

/// One-shot codec over a whole payload.
///
/// Implementations are stateless unit structs shared as `&'static dyn Codec`,
/// so they must be `Send + Sync`.
pub trait Codec: Send + Sync {
    fn algorithm(&self) -> Algorithm;

    /// True when the native format does not record the original length and
    /// every frame carries a 4-byte big-endian length prefix instead.
    fn needs_length_prefix(&self) -> bool {
        false
    }

    /// Compress `input` into one complete frame.
    fn compress(&self, input: &[u8], level: i32) -> Result<Vec<u8>, CompressionError>;

    /// Decompress one complete frame.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError>;
}
