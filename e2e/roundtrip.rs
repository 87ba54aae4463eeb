// e2e/roundtrip.rs — end-to-end codec properties.
//
// Exercises the public compress/decompress pair over the full range of
// input shapes: conformance vectors, degenerate sizes, structured and
// synthetic corpora, and incompressible data. The governing property is
// decode(encode(input)) == input; header integrity and even container
// length are asserted alongside.

use lzkn64::codec::types::read_be24;
use lzkn64::corpus;
use lzkn64::{compress, decompress};

/// Round-trip `input` and assert the container-wide invariants.
fn assert_roundtrip(input: &[u8]) {
    let container = compress(input).unwrap();
    assert_eq!(container[0], 0x00, "reserved byte must be zero");
    assert_eq!(
        read_be24(&container[1..4]),
        container.len(),
        "stored length must equal container length"
    );
    assert_eq!(container.len() % 2, 0, "container length must be even");

    let recovered = decompress(&container).unwrap();
    assert_eq!(
        recovered,
        input,
        "round-trip mismatch for {} input bytes",
        input.len()
    );
}

// ── Conformance vectors ──────────────────────────────────────────────────────

#[test]
fn conformance_empty() {
    assert_eq!(compress(&[]).unwrap(), [0x00, 0x00, 0x00, 0x04]);
    assert_roundtrip(&[]);
}

#[test]
fn conformance_single_byte() {
    assert_eq!(
        compress(&[0x41]).unwrap(),
        [0x00, 0x00, 0x00, 0x06, 0x81, 0x41]
    );
    assert_roundtrip(&[0x41]);
}

#[test]
fn conformance_five_zeros() {
    assert_eq!(
        compress(&[0x00; 5]).unwrap(),
        [0x00, 0x00, 0x00, 0x06, 0xE3, 0x00]
    );
    assert_roundtrip(&[0x00; 5]);
}

#[test]
fn conformance_value_run() {
    assert_eq!(
        compress(&[0xAB; 10]).unwrap(),
        [0x00, 0x00, 0x00, 0x06, 0xC8, 0xAB]
    );
    assert_roundtrip(&[0xAB; 10]);
}

#[test]
fn conformance_repeating_pattern() {
    let input = [0x01, 0x02, 0x03, 0x01, 0x02, 0x03, 0x01, 0x02, 0x03];
    assert_eq!(
        &compress(&input).unwrap()[4..],
        [0x83, 0x01, 0x02, 0x03, 0x10, 0x03]
    );
    assert_roundtrip(&input);
}

// ── Degenerate and boundary sizes ────────────────────────────────────────────

#[test]
fn roundtrip_tiny_inputs() {
    for n in 0..=8usize {
        assert_roundtrip(&vec![0x00; n]);
        assert_roundtrip(&vec![0x5A; n]);
        let ascending: Vec<u8> = (0..n as u8).collect();
        assert_roundtrip(&ascending);
    }
}

#[test]
fn roundtrip_raw_copy_chunk_boundaries() {
    // Straddle the 31-literal raw-copy limit.
    for n in [30usize, 31, 32, 62, 63, 93, 94] {
        let input: Vec<u8> = (0..n).map(|i| (i % 251) as u8).collect();
        assert_roundtrip(&input);
    }
}

#[test]
fn roundtrip_run_length_boundaries() {
    // Around the short-run cap (0x20/0x21) and the long-run cap (0x101).
    for n in [0x1F, 0x20, 0x21, 0x22, 0x100, 0x101, 0x102, 300] {
        assert_roundtrip(&vec![0x00; n]);
        assert_roundtrip(&vec![0x77; n]);
    }
}

#[test]
fn roundtrip_zero_runs_across_alignment_boundaries() {
    // Long zero stretches whose runs get cut at the 0x421/0x821 residues.
    let mut input = vec![0x55u8; 0x330];
    input.resize(0x330 + 0x800, 0x00);
    assert_roundtrip(&input);
}

#[test]
fn roundtrip_window_distance_extremes() {
    // A unit repeated just inside and beyond the maximum back-distance.
    for gap in [0x3DE, 0x3DF, 0x3E0] {
        let mut input = Vec::new();
        input.extend_from_slice(b"0123456789abcdef");
        input.resize(gap, 0xEE);
        input.extend_from_slice(b"0123456789abcdef");
        assert_roundtrip(&input);
    }
}

// ── Corpus and incompressible data ───────────────────────────────────────────

#[test]
fn roundtrip_corpus_buffers() {
    for (size, seed) in [(1_000usize, 1u32), (4_096, 2), (16_384, 3), (65_536, 4)] {
        assert_roundtrip(&corpus::gen_buffer(size, seed));
    }
}

#[test]
fn roundtrip_incompressible_100k() {
    // Uniform random bytes: no ratio guarantee (the container may exceed
    // the input), but the round trip must still hold.
    let input = corpus::gen_random(100 * 1024, 0xDEAD);
    let container = compress(&input).unwrap();
    assert!(container.len() % 2 == 0);
    assert_eq!(decompress(&container).unwrap(), input);
}

#[test]
fn roundtrip_large_zero_block() {
    assert_roundtrip(&vec![0x00; 256 * 1024]);
}

#[test]
fn roundtrip_text_like_data() {
    let unit = b"the quick brown fox jumps over the lazy dog. ";
    let mut input = Vec::new();
    while input.len() < 20_000 {
        input.extend_from_slice(unit);
    }
    assert_roundtrip(&input);
}
