//! src/compression/codecs/zstd.rs
//!
//! Zstd codec over the one-shot bulk API.
//!
//! Design notes:
//! - Frames are native zstd frames, no extra framing.
//! - The declared content size is checked against the platform buffer limit
//!   and against what the frame's length can expand to, and the output buffer
//!   is reserved fallibly before decoding.
//! - Frames without a declared size fall back to the streaming decoder, whose
//!   buffer only grows with real output.

use std::io;

use zstd::bulk::Decompressor;

use crate::compression::constants::{MAX_BUFFER_LEN, ZSTD_MAX_EXPANSION};
use crate::compression::framing::reserve_declared;
use crate::compression::types::{Algorithm, Codec, CompressionError};

pub struct ZstdCodec;

impl ZstdCodec {
    /// Declared decompressed size from the frame header, `None` if unknown.
    ///
    /// # Errors
    /// - `SizeOverflow` if the declared size exceeds `MAX_BUFFER_LEN`.
    /// - `DecodeFailure` if the header cannot be parsed.
    pub fn content_size(input: &[u8]) -> Result<Option<usize>, CompressionError> {
        let declared = zstd_safe::get_frame_content_size(input).map_err(|_| {
            CompressionError::decode(
                Algorithm::Zstd,
                input.len(),
                io::Error::new(io::ErrorKind::InvalidData, "invalid zstd frame header"),
            )
        })?;

        match declared {
            Some(size) if size > MAX_BUFFER_LEN => Err(CompressionError::SizeOverflow {
                declared: size,
                max: MAX_BUFFER_LEN,
            }),
            Some(size) => usize::try_from(size)
                .map(Some)
                .map_err(|_| CompressionError::SizeOverflow { declared: size, max: MAX_BUFFER_LEN }),
            None => Ok(None),
        }
    }
}

impl Codec for ZstdCodec {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Zstd
    }

    fn compress(&self, input: &[u8], level: i32) -> Result<Vec<u8>, CompressionError> {
        zstd::bulk::compress(input, level)
            .map_err(|e| CompressionError::encode(Algorithm::Zstd, input.len(), e))
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let declared = match Self::content_size(input)? {
            Some(0) | None => {
                return zstd::stream::decode_all(input)
                    .map_err(|e| CompressionError::decode(Algorithm::Zstd, input.len(), e));
            }
            Some(declared) => declared,
        };

        let mut out = reserve_declared(declared, input.len(), ZSTD_MAX_EXPANSION)?;
        let written = Decompressor::new()
            .and_then(|mut d| d.decompress_to_buffer(input, &mut out))
            .map_err(|e| CompressionError::decode(Algorithm::Zstd, input.len(), e))?;

        if written != declared {
            return Err(CompressionError::decode(
                Algorithm::Zstd,
                input.len(),
                format!("decoded size {written} != declared {declared}"),
            ));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // magic, FHD (8-byte content size, no single-segment), window byte, size
    fn header_declaring(size: u64) -> Vec<u8> {
        let mut frame = vec![0x28, 0xB5, 0x2F, 0xFD, 0xC0, 0x00];
        frame.extend_from_slice(&size.to_le_bytes());
        frame
    }

    #[test]
    fn content_size_is_read_from_header() {
        let frame = ZstdCodec.compress(&[7u8; 1000], 3).unwrap();
        assert_eq!(ZstdCodec::content_size(&frame).unwrap(), Some(1000));
    }

    #[test]
    fn oversized_declaration_is_rejected_before_decoding() {
        let frame = header_declaring(MAX_BUFFER_LEN + 1);
        assert!(matches!(
            ZstdCodec.decompress(&frame),
            Err(CompressionError::SizeOverflow { declared, .. }) if declared == MAX_BUFFER_LEN + 1
        ));
    }

    #[test]
    fn declaration_beyond_frame_capacity_is_rejected() {
        // 1 TiB claimed by a 14-byte frame.
        let frame = header_declaring(1 << 40);
        match ZstdCodec.decompress(&frame) {
            Err(CompressionError::SizeOverflow { declared, max }) => {
                assert_eq!(declared, 1 << 40);
                assert_eq!(max, (frame.len() * ZSTD_MAX_EXPANSION) as u64);
            }
            other => panic!("expected SizeOverflow, got {other:?}"),
        }
    }

    #[test]
    fn plausible_declaration_without_blocks_is_decode_failure() {
        let frame = header_declaring(64);
        assert!(matches!(
            ZstdCodec.decompress(&frame),
            Err(CompressionError::DecodeFailure { algorithm: Algorithm::Zstd, .. })
        ));
    }

    #[test]
    fn garbage_is_a_decode_failure() {
        assert!(matches!(
            ZstdCodec.decompress(b"definitely not zstd"),
            Err(CompressionError::DecodeFailure { algorithm: Algorithm::Zstd, input_len: 19, .. })
        ));
    }

    #[test]
    fn streaming_frames_without_size_still_decode() {
        let mut enc = zstd::stream::Encoder::new(Vec::new(), 3).unwrap();
        std::io::Write::write_all(&mut enc, b"streamed payload").unwrap();
        let frame = enc.finish().unwrap();

        assert_eq!(ZstdCodec.decompress(&frame).unwrap(), b"streamed payload");
    }
}
