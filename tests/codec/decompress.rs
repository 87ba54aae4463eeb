// Unit tests for container decoding:
//   - canonical containers decode to their original byte sequences
//   - every token class dispatches correctly, including the historical
//     0xA0..0xBF raw-copy range
//   - the self-referential window copy reproduces run-like matches
//   - the trailing alignment pad is recognized, not misread as a token
//   - every malformed-input condition maps to the right error

use lzkn64::codec::decompress::{decompress, decompress_into, DecompressError};

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn decompress_error_eq_and_debug() {
    assert_eq!(
        DecompressError::TruncatedInput,
        DecompressError::TruncatedInput
    );
    assert_ne!(
        DecompressError::TruncatedInput,
        DecompressError::MalformedHeader
    );
    let _ = format!("{:?}", DecompressError::BackReferenceUnderflow);
    let _ = format!("{}", DecompressError::OutputTooLarge);
}

// ─────────────────────────────────────────────────────────────────────────────
// Canonical containers
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn header_only_container_is_empty() {
    assert_eq!(decompress(&[0x00, 0x00, 0x00, 0x04]).unwrap(), []);
}

#[test]
fn raw_copy_single_byte() {
    assert_eq!(
        decompress(&[0x00, 0x00, 0x00, 0x06, 0x81, 0x41]).unwrap(),
        [0x41]
    );
}

#[test]
fn short_zero_run_with_trailing_pad() {
    // The pad byte is inside the declared length and must not be read as a
    // window-copy command.
    assert_eq!(
        decompress(&[0x00, 0x00, 0x00, 0x06, 0xE3, 0x00]).unwrap(),
        [0x00; 5]
    );
}

#[test]
fn value_run() {
    assert_eq!(
        decompress(&[0x00, 0x00, 0x00, 0x06, 0xC8, 0xAB]).unwrap(),
        [0xAB; 10]
    );
}

#[test]
fn long_zero_run_extremes() {
    // Operand 0x00 is the minimum long run (2 zeros).
    assert_eq!(
        decompress(&[0x00, 0x00, 0x00, 0x06, 0xFF, 0x00]).unwrap(),
        [0x00; 2]
    );
    // Operand 0xFF saturates at 257 zeros.
    assert_eq!(
        decompress(&[0x00, 0x00, 0x00, 0x06, 0xFF, 0xFF]).unwrap(),
        vec![0x00; 257]
    );
}

#[test]
fn window_copy_after_raw_copy() {
    assert_eq!(
        decompress(&[
            0x00, 0x00, 0x00, 0x0A, 0x83, 0x01, 0x02, 0x03, 0x10, 0x03
        ])
        .unwrap(),
        [0x01, 0x02, 0x03, 0x01, 0x02, 0x03, 0x01, 0x02, 0x03]
    );
}

#[test]
fn self_referential_window_copy() {
    // Length 8 at distance 4: the copy consumes bytes it wrote itself.
    assert_eq!(
        decompress(&[
            0x00, 0x00, 0x00, 0x0C, 0x84, b'a', b'b', b'c', b'd', 0x18, 0x04, 0x00
        ])
        .unwrap(),
        b"abcdabcdabcd"
    );
}

#[test]
fn historical_raw_copy_range_is_accepted() {
    // 0xA0..0xBF is never emitted by the encoder but decodes as raw copy.
    assert_eq!(
        decompress(&[0x00, 0x00, 0x00, 0x08, 0xA3, 0x01, 0x02, 0x03]).unwrap(),
        [0x01, 0x02, 0x03]
    );
}

#[test]
fn reserved_byte_is_not_checked() {
    // Wild inputs may carry a nonzero reserved byte; decoding ignores it.
    assert_eq!(
        decompress(&[0x42, 0x00, 0x00, 0x06, 0x81, 0x41]).unwrap(),
        [0x41]
    );
}

#[test]
fn trailing_bytes_past_declared_length_are_ignored() {
    // The declared length governs; bytes after it do not take part.
    assert_eq!(
        decompress(&[0x00, 0x00, 0x00, 0x06, 0x81, 0x41, 0xDE, 0xAD]).unwrap(),
        [0x41]
    );
}

#[test]
fn decompress_into_replaces_contents() {
    let mut out = vec![0xEE; 64];
    let written = decompress_into(&[0x00, 0x00, 0x00, 0x06, 0xC8, 0xAB], &mut out).unwrap();
    assert_eq!(written, 10);
    assert_eq!(out, [0xAB; 10]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Malformed input
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn input_shorter_than_header_is_malformed() {
    assert_eq!(decompress(&[]), Err(DecompressError::MalformedHeader));
    assert_eq!(
        decompress(&[0x00, 0x00, 0x00]),
        Err(DecompressError::MalformedHeader)
    );
}

#[test]
fn declared_length_below_header_is_malformed() {
    assert_eq!(
        decompress(&[0x00, 0x00, 0x00, 0x02]),
        Err(DecompressError::MalformedHeader)
    );
}

#[test]
fn declared_length_past_input_is_malformed() {
    assert_eq!(
        decompress(&[0x00, 0x00, 0x00, 0x0A, 0x81, 0x41]),
        Err(DecompressError::MalformedHeader)
    );
}

#[test]
fn missing_operand_is_truncated() {
    // Value-run command at the very end of the declared region.
    assert_eq!(
        decompress(&[0x00, 0x00, 0x00, 0x05, 0xC5]),
        Err(DecompressError::TruncatedInput)
    );
}

#[test]
fn short_raw_copy_payload_is_truncated() {
    // Raw copy of 31 literals with only one available.
    assert_eq!(
        decompress(&[0x00, 0x00, 0x00, 0x06, 0x9F, 0x41]),
        Err(DecompressError::TruncatedInput)
    );
}

#[test]
fn window_copy_into_empty_output_underflows() {
    assert_eq!(
        decompress(&[0x00, 0x00, 0x00, 0x06, 0x10, 0x03]),
        Err(DecompressError::BackReferenceUnderflow)
    );
}

#[test]
fn window_copy_past_written_output_underflows() {
    // One literal written, then a copy from distance 2.
    assert_eq!(
        decompress(&[0x00, 0x00, 0x00, 0x08, 0x81, 0x41, 0x10, 0x02]),
        Err(DecompressError::BackReferenceUnderflow)
    );
}

#[test]
fn zero_distance_window_copy_underflows() {
    // Distance 0 would read the byte being written.
    assert_eq!(
        decompress(&[0x00, 0x00, 0x00, 0x08, 0x81, 0x41, 0x10, 0x00]),
        Err(DecompressError::BackReferenceUnderflow)
    );
}
