#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Inputs past the 24-bit bound are rejected up front; nothing to check.
    let Ok(container) = lzkn64::compress(data) else {
        return;
    };

    let recovered =
        lzkn64::decompress(&container).expect("containers produced by compress must decode");

    assert_eq!(
        recovered,
        data,
        "round-trip mismatch: {} input bytes, {} container bytes",
        data.len(),
        container.len()
    );
});
