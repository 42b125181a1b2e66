//! codecs/lz4.rs
//! LZ4 block codec with a 4-byte big-endian original-length prefix.
//!
//! The raw block format does not record the uncompressed size, so every frame
//! is `[u32 BE original_len][block]` (see `compression::framing`).
use lz4_flex::block::{compress_into, decompress_into, get_maximum_output_size};

use crate::compression::constants::LZ4_MAX_EXPANSION;
use crate::compression::framing::{encode_prefixed, reserve_declared, split_prefixed};
use crate::compression::types::{Algorithm, Codec, CompressionError};

/// LZ4 has no level concept in block mode; the level argument is ignored.
pub struct Lz4Codec;

impl Codec for Lz4Codec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Lz4
    }

    fn needs_length_prefix(&self) -> bool {
        true
    }

    fn compress(&self, input: &[u8], _level: i32) -> Result<Vec<u8>, CompressionError> {
        let bound = get_maximum_output_size(input.len());
        encode_prefixed(Algorithm::Lz4, input.len(), bound, |dst| {
            compress_into(input, dst).map_err(|e| CompressionError::encode(Algorithm::Lz4, input.len(), e))
        })
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let (declared, block) = split_prefixed(Algorithm::Lz4, input)?;

        let mut out = reserve_declared(declared, block.len(), LZ4_MAX_EXPANSION)?;
        out.resize(declared, 0);
        let written = decompress_into(block, &mut out)
            .map_err(|e| CompressionError::decode(Algorithm::Lz4, input.len(), e))?;

        if written != declared {
            return Err(CompressionError::decode(
                Algorithm::Lz4,
                input.len(),
                format!("decoded size {written} != declared {declared}"),
            ));
        }
        Ok(out)
    }
}
