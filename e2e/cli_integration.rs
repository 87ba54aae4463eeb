// e2e/cli_integration.rs — CLI integration tests.
//
// Drives the `lzkn64` binary as a black box through std::process::Command:
// compress/decompress round trips over real files, argument errors, and
// exit codes.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Locate the `lzkn64` binary produced by Cargo.
fn lzkn64_bin() -> PathBuf {
    // CARGO_BIN_EXE_lzkn64 is set by Cargo when running integration tests.
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_lzkn64") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop(); // remove test binary filename
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("lzkn64");
    p
}

/// Create a TempDir containing a compressible input file.
fn make_temp_input() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("input.bin");
    let mut content = b"LZKN64 sample payload. ".repeat(200);
    content.extend_from_slice(&[0x00; 1024]);
    fs::write(&input_path, content).unwrap();
    (dir, input_path)
}

// ── Round trip through files ─────────────────────────────────────────────────

#[test]
fn cli_compress_decompress_roundtrip() {
    let (dir, input) = make_temp_input();
    let original = fs::read(&input).unwrap();

    let compressed = dir.path().join("output.lzkn64");
    let roundtrip = dir.path().join("roundtrip.bin");

    let status = Command::new(lzkn64_bin())
        .args(["-c", input.to_str().unwrap(), compressed.to_str().unwrap()])
        .status()
        .expect("failed to run lzkn64 -c");
    assert!(status.success(), "compress step should exit 0");

    // The written container carries a valid header and even length.
    let container = fs::read(&compressed).unwrap();
    assert_eq!(container[0], 0x00);
    let stored = ((container[1] as usize) << 16)
        | ((container[2] as usize) << 8)
        | container[3] as usize;
    assert_eq!(stored, container.len());
    assert_eq!(container.len() % 2, 0);
    assert!(
        container.len() < original.len(),
        "sample payload should compress"
    );

    let status = Command::new(lzkn64_bin())
        .args([
            "-d",
            compressed.to_str().unwrap(),
            roundtrip.to_str().unwrap(),
        ])
        .status()
        .expect("failed to run lzkn64 -d");
    assert!(status.success(), "decompress step should exit 0");

    assert_eq!(
        fs::read(&roundtrip).unwrap(),
        original,
        "roundtrip output must match original"
    );
}

// ── Argument errors ──────────────────────────────────────────────────────────

#[test]
fn cli_no_arguments_fails_with_usage() {
    let output = Command::new(lzkn64_bin())
        .output()
        .expect("failed to run lzkn64");
    assert!(!output.status.success(), "missing arguments should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("lzkn64 [-c|-d] input output"),
        "usage text expected on stderr; got: {stderr}"
    );
}

#[test]
fn cli_unknown_mode_fails() {
    let (dir, input) = make_temp_input();
    let out = dir.path().join("out.bin");
    let output = Command::new(lzkn64_bin())
        .args(["-x", input.to_str().unwrap(), out.to_str().unwrap()])
        .output()
        .expect("failed to run lzkn64 -x");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad usage"), "got: {stderr}");
}

#[test]
fn cli_too_many_arguments_fails() {
    let output = Command::new(lzkn64_bin())
        .args(["-c", "a", "b", "c"])
        .output()
        .expect("failed to run lzkn64");
    assert!(!output.status.success());
}

// ── I/O errors ───────────────────────────────────────────────────────────────

#[test]
fn cli_missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist.bin");
    let out = dir.path().join("out.bin");
    let output = Command::new(lzkn64_bin())
        .args(["-c", missing.to_str().unwrap(), out.to_str().unwrap()])
        .output()
        .expect("failed to run lzkn64");
    assert!(!output.status.success(), "missing input should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("lzkn64:"), "diagnostic expected; got: {stderr}");
}

#[test]
fn cli_decompress_garbage_fails() {
    let dir = TempDir::new().unwrap();
    let garbage = dir.path().join("garbage.bin");
    fs::write(&garbage, [0xDE, 0xAD]).unwrap();
    let out = dir.path().join("out.bin");
    let output = Command::new(lzkn64_bin())
        .args(["-d", garbage.to_str().unwrap(), out.to_str().unwrap()])
        .output()
        .expect("failed to run lzkn64 -d");
    assert!(!output.status.success(), "garbage container should fail");
}
