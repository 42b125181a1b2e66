//! codecs/brotli.rs
//! Brotli stream codec. Self-describing, no extra framing.
//! Level maps to brotli quality and is clamped into [0, 11].
use brotli::enc::BrotliEncoderParams;

use crate::compression::constants::{BROTLI_MAX_QUALITY, BROTLI_MIN_QUALITY};
use crate::compression::types::{Algorithm, Codec, CompressionError};

pub struct BrotliCodec;

impl BrotliCodec {
    pub fn quality_for(level: i32) -> i32 {
        level.clamp(BROTLI_MIN_QUALITY, BROTLI_MAX_QUALITY)
    }
}

impl Codec for BrotliCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Brotli
    }

    fn compress(&self, input: &[u8], level: i32) -> Result<Vec<u8>, CompressionError> {
        let mut params = BrotliEncoderParams::default();
        params.quality = Self::quality_for(level);

        let mut reader = input;
        let mut out = Vec::new();
        brotli::BrotliCompress(&mut reader, &mut out, &params)
            .map_err(|e| CompressionError::encode(Algorithm::Brotli, input.len(), e))?;
        Ok(out)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut reader = input;
        let mut out = Vec::new();
        brotli::BrotliDecompress(&mut reader, &mut out)
            .map_err(|e| CompressionError::decode(Algorithm::Brotli, input.len(), e))?;
        Ok(out)
    }
}
