//! compression/framing.rs
//! Length-prefix framing for codecs whose native output is not self-describing.
//!
//! Layout: `[u32 BE original_len][codec block]`. The prefix is written in place
//! ahead of the block so no second copy of the compressed bytes is made.
//!
//! Also home to `reserve_declared`, the output allocation shared by every
//! decoder that trusts a size read from its input.

use byteorder::{BigEndian, ByteOrder};

use crate::compression::constants::LENGTH_PREFIX_LEN;
use crate::compression::types::{Algorithm, CompressionError};

/// Build a length-prefixed frame.
///
/// `bound` is the worst-case block size for `original_len` input bytes.
/// `fill` compresses into the slice after the prefix and returns the number
/// of bytes it wrote; the frame is truncated to `LENGTH_PREFIX_LEN + written`.
pub fn encode_prefixed<F>(
    algorithm: Algorithm,
    original_len: usize,
    bound: usize,
    fill: F,
) -> Result<Vec<u8>, CompressionError>
where
    F: FnOnce(&mut [u8]) -> Result<usize, CompressionError>,
{
    let declared = u32::try_from(original_len).map_err(|_| {
        CompressionError::encode(
            algorithm,
            original_len,
            format!("input of {original_len} bytes does not fit a 32-bit length prefix"),
        )
    })?;

    let mut frame = vec![0u8; LENGTH_PREFIX_LEN + bound];
    BigEndian::write_u32(&mut frame[..LENGTH_PREFIX_LEN], declared);

    let written = fill(&mut frame[LENGTH_PREFIX_LEN..])?;
    frame.truncate(LENGTH_PREFIX_LEN + written);
    Ok(frame)
}

/// Split a length-prefixed frame into `(declared_len, block)`.
pub fn split_prefixed(algorithm: Algorithm, frame: &[u8]) -> Result<(usize, &[u8]), CompressionError> {
    if frame.len() < LENGTH_PREFIX_LEN {
        return Err(CompressionError::MalformedFrame {
            algorithm,
            len: frame.len(),
            need: LENGTH_PREFIX_LEN,
        });
    }
    let (prefix, block) = frame.split_at(LENGTH_PREFIX_LEN);
    Ok((BigEndian::read_u32(prefix) as usize, block))
}

/// Empty buffer with room for exactly `declared` decoded bytes.
///
/// `declared` comes from an untrusted header, so it is checked against what
/// `input_len` bytes can expand to and the reservation itself is fallible.
pub fn reserve_declared(
    declared: usize,
    input_len: usize,
    max_expansion: usize,
) -> Result<Vec<u8>, CompressionError> {
    let ceiling = input_len.saturating_mul(max_expansion);
    let overflow = || CompressionError::SizeOverflow { declared: declared as u64, max: ceiling as u64 };
    if declared > ceiling {
        return Err(overflow());
    }

    let mut out = Vec::new();
    out.try_reserve_exact(declared).map_err(|_| overflow())?;
    Ok(out)
}
