//! compression/mod.rs
//! Codec dispatch: one `compress`/`decompress` pair over every algorithm.
//!
//! Notes:
//! - zstd, snappy and brotli frames are the codec's native container.
//! - LZ4 frames carry a 4-byte big-endian original length ahead of the block.
//! - Output larger than input is logged as a warning, never an error.

pub mod codecs;
pub mod constants;
pub mod framing;
pub mod registry;
pub mod types;

pub use constants::*;
pub use registry::*;
pub use types::*;

use tracing::{debug, info, warn};

/// Compress `payload` with `algorithm`.
///
/// `level` is passed to zstd as is, clamped for brotli and ignored by LZ4 and
/// snappy. Empty payloads are valid for every algorithm.
pub fn compress(payload: &[u8], algorithm: Algorithm, level: i32) -> Result<Vec<u8>, CompressionError> {
    debug!(
        algorithm = algorithm.display_name(),
        level,
        input_len = payload.len(),
        "starting compression"
    );

    let out = codec_for(algorithm).compress(payload, level)?;
    log_compression_outcome(algorithm, payload.len(), out.len());
    Ok(out)
}

/// Decompress one frame produced by `compress` with the same `algorithm`.
pub fn decompress(payload: &[u8], algorithm: Algorithm) -> Result<Vec<u8>, CompressionError> {
    debug!(
        algorithm = algorithm.display_name(),
        input_len = payload.len(),
        "starting decompression"
    );

    let codec = codec_for(algorithm);
    if codec.needs_length_prefix() && payload.len() < LENGTH_PREFIX_LEN {
        return Err(CompressionError::MalformedFrame {
            algorithm,
            len: payload.len(),
            need: LENGTH_PREFIX_LEN,
        });
    }

    let out = codec.decompress(payload)?;
    info!(
        algorithm = algorithm.display_name(),
        input_len = payload.len(),
        output_len = out.len(),
        "decompression finished"
    );
    Ok(out)
}

/// Compressed size as a percentage of the original.
///
/// Empty input reports 0% for empty output and 100% otherwise.
pub fn compression_ratio_percent(original_len: usize, compressed_len: usize) -> f64 {
    if original_len == 0 {
        return if compressed_len == 0 { 0.0 } else { 100.0 };
    }
    compressed_len as f64 / original_len as f64 * 100.0
}

/// True when compression made the payload bigger.
#[inline]
pub fn size_increased(original_len: usize, compressed_len: usize) -> bool {
    compressed_len > original_len
}

pub(crate) fn log_compression_outcome(algorithm: Algorithm, original_len: usize, compressed_len: usize) {
    let ratio = format!("{:.2}", compression_ratio_percent(original_len, compressed_len));
    if size_increased(original_len, compressed_len) {
        warn!(
            algorithm = algorithm.display_name(),
            input_len = original_len,
            output_len = compressed_len,
            ratio_percent = %ratio,
            "compression increased size; data may already be compressed"
        );
    } else {
        info!(
            algorithm = algorithm.display_name(),
            input_len = original_len,
            output_len = compressed_len,
            ratio_percent = %ratio,
            "compression finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_every_algorithm() {
        let payload = b"The quick brown fox jumps over the lazy dog. ".repeat(50);
        for alg in Algorithm::ALL {
            let frame = compress(&payload, alg, DEFAULT_LEVEL).unwrap();
            assert!(frame.len() < payload.len(), "{alg} did not shrink repetitive text");
            assert_eq!(decompress(&frame, alg).unwrap(), payload);
        }
    }

    #[test]
    fn empty_payload_roundtrips() {
        for alg in Algorithm::ALL {
            let frame = compress(&[], alg, DEFAULT_LEVEL).unwrap();
            assert!(!frame.is_empty());
            assert!(decompress(&frame, alg).unwrap().is_empty());
        }
    }

    #[test]
    fn short_lz4_frame_rejected_by_dispatch() {
        assert!(matches!(
            decompress(&[1, 2, 3], Algorithm::Lz4),
            Err(CompressionError::MalformedFrame { len: 3, .. })
        ));
    }

    #[test]
    fn ratio_edge_cases() {
        assert_eq!(compression_ratio_percent(0, 0), 0.0);
        assert_eq!(compression_ratio_percent(0, 9), 100.0);
        assert_eq!(compression_ratio_percent(200, 50), 25.0);
        assert!(size_increased(10, 11));
        assert!(!size_increased(10, 10));
    }
}
