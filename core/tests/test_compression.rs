// Codec dispatch through the public `compress` / `decompress` pair:
// * round trips for every algorithm, empty input included
// * LZ4 length prefix
// * brotli quality clamping
// * declared-size guards on every header-trusting decoder
// * incompressible input

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{rngs::StdRng, RngCore, SeedableRng};
    use squash_core::compression::{
        compress, decompress, Algorithm, CompressionError, DEFAULT_LEVEL, LENGTH_PREFIX_LEN,
        MAX_BUFFER_LEN,
    };

    fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut buf = vec![0u8; len];
        rng.fill_bytes(&mut buf);
        buf
    }

    #[test]
    fn lz4_frame_starts_with_big_endian_length() {
        let payload = b"abcabcabcabcabcabcabcabc".repeat(10);
        let frame = compress(&payload, Algorithm::Lz4, DEFAULT_LEVEL).expect("lz4 compress");

        let declared = u32::from_be_bytes([frame[0], frame[1], frame[2], frame[3]]);
        assert_eq!(declared as usize, payload.len());
        assert!(frame.len() > LENGTH_PREFIX_LEN);
    }

    #[test]
    fn lz4_empty_frame_is_zero_prefix_plus_block() {
        let frame = compress(&[], Algorithm::Lz4, DEFAULT_LEVEL).expect("lz4 compress");
        assert_eq!(&frame[..LENGTH_PREFIX_LEN], &[0u8; 4]);
        assert!(decompress(&frame, Algorithm::Lz4).expect("lz4 decompress").is_empty());
    }

    #[test]
    fn lz4_level_is_ignored() {
        let payload = b"level does not matter for lz4 ".repeat(20);
        let a = compress(&payload, Algorithm::Lz4, 1).unwrap();
        let b = compress(&payload, Algorithm::Lz4, 22).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn brotli_levels_are_clamped() {
        let payload = b"brotli quality clamps into 0..=11. ".repeat(40);

        let low = compress(&payload, Algorithm::Brotli, -5).unwrap();
        let zero = compress(&payload, Algorithm::Brotli, 0).unwrap();
        assert_eq!(low, zero);

        let high = compress(&payload, Algorithm::Brotli, 99).unwrap();
        let eleven = compress(&payload, Algorithm::Brotli, 11).unwrap();
        assert_eq!(high, eleven);

        assert_eq!(decompress(&high, Algorithm::Brotli).unwrap(), payload);
    }

    #[test]
    fn zstd_oversized_declared_size_is_rejected() {
        // Frame header with an 8-byte content size field; u64::MAX itself would
        // read back as "unknown size".
        let oversized = MAX_BUFFER_LEN + 1;
        let mut frame = vec![0x28, 0xB5, 0x2F, 0xFD, 0xC0, 0x00];
        frame.extend_from_slice(&oversized.to_le_bytes());

        match decompress(&frame, Algorithm::Zstd) {
            Err(CompressionError::SizeOverflow { declared, .. }) => assert_eq!(declared, oversized),
            other => panic!("expected SizeOverflow, got {other:?}"),
        }
    }

    #[test]
    fn zstd_terabyte_declaration_returns_error() {
        let mut frame = vec![0x28, 0xB5, 0x2F, 0xFD, 0xC0, 0x00];
        frame.extend_from_slice(&(1u64 << 40).to_le_bytes());

        assert!(matches!(
            decompress(&frame, Algorithm::Zstd),
            Err(CompressionError::SizeOverflow { declared, .. }) if declared == 1 << 40
        ));
    }

    #[test]
    fn lz4_four_gib_prefix_returns_error() {
        assert!(matches!(
            decompress(&[0xFF, 0xFF, 0xFF, 0xFF, 0x00], Algorithm::Lz4),
            Err(CompressionError::SizeOverflow { declared: 0xFFFF_FFFF, .. })
        ));
    }

    #[test]
    fn snappy_four_gib_preamble_returns_error() {
        assert!(matches!(
            decompress(&[0xFF, 0xFF, 0xFF, 0xFF, 0x0F, 0x00], Algorithm::Snappy),
            Err(CompressionError::SizeOverflow { declared: 0xFFFF_FFFF, .. })
        ));
    }

    #[test]
    fn long_zero_runs_roundtrip_under_expansion_limits() {
        let payload = vec![0u8; 4 << 20];
        for alg in Algorithm::ALL {
            let frame = compress(&payload, alg, DEFAULT_LEVEL).unwrap();
            assert_eq!(decompress(&frame, alg).unwrap(), payload, "{alg}");
        }
    }

    #[test]
    fn incompressible_input_still_succeeds() {
        let payload = random_bytes(4096, 0x5eed);
        for alg in Algorithm::ALL {
            let frame = compress(&payload, alg, DEFAULT_LEVEL).expect("compress random bytes");
            assert!(frame.len() >= payload.len(), "{alg} shrank random data");
            assert_eq!(decompress(&frame, alg).expect("decompress random bytes"), payload);
        }
    }

    #[test]
    fn garbage_is_rejected_not_panicking() {
        let garbage = random_bytes(64, 7);
        for alg in [Algorithm::Zstd, Algorithm::Snappy] {
            assert!(decompress(&garbage, alg).is_err(), "{alg} accepted garbage");
        }
    }

    #[test]
    fn short_lz4_frames_are_malformed() {
        for len in 0..LENGTH_PREFIX_LEN {
            let frame = vec![0u8; len];
            assert!(matches!(
                decompress(&frame, Algorithm::Lz4),
                Err(CompressionError::MalformedFrame { need: LENGTH_PREFIX_LEN, .. })
            ));
        }
    }

    fn any_algorithm() -> impl Strategy<Value = Algorithm> {
        prop::sample::select(Algorithm::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_roundtrip(
            alg in any_algorithm(),
            level in 1i32..=9,
            payload in prop::collection::vec(any::<u8>(), 0..2048),
        ) {
            let frame = compress(&payload, alg, level).unwrap();
            prop_assert_eq!(decompress(&frame, alg).unwrap(), payload);
        }

        #[test]
        fn prop_lz4_prefix_matches_input_len(payload in prop::collection::vec(any::<u8>(), 0..1024)) {
            let frame = compress(&payload, Algorithm::Lz4, DEFAULT_LEVEL).unwrap();
            let declared = u32::from_be_bytes([frame[0], frame[1], frame[2], frame[3]]);
            prop_assert_eq!(declared as usize, payload.len());
        }
    }
}
