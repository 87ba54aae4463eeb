#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must decode cleanly or return an error — never panic,
    // never allocate past the format's output bound.
    let _ = lzkn64::decompress(data);
});
