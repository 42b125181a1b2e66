//! codecs/snappy.rs
//! Snappy raw format. Self-describing (varint length preamble), no extra framing.
use snap::raw::{decompress_len, Decoder, Encoder};

use crate::compression::constants::SNAPPY_MAX_EXPANSION;
use crate::compression::framing::reserve_declared;

use crate::compression::types::{Algorithm, Codec, CompressionError};

pub struct SnappyCodec;

impl Codec for SnappyCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Snappy
    }

    fn compress(&self, input: &[u8], _level: i32) -> Result<Vec<u8>, CompressionError> {
        Encoder::new()
            .compress_vec(input)
            .map_err(|e| CompressionError::encode(Algorithm::Snappy, input.len(), e))
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let fail = |e: snap::Error| CompressionError::decode(Algorithm::Snappy, input.len(), e);

        let declared = decompress_len(input).map_err(fail)?;
        let mut out = reserve_declared(declared, input.len(), SNAPPY_MAX_EXPANSION)?;
        out.resize(declared, 0);

        let written = Decoder::new().decompress(input, &mut out).map_err(fail)?;
        out.truncate(written);
        Ok(out)
    }
}
