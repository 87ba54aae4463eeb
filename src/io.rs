//! Whole-file compression and decompression used by the command-line tool.
//!
//! The format operates on fully resident buffers, so each operation reads
//! the complete input file, runs the codec, writes the result, and returns
//! the byte counts. A one-line summary is printed to stderr at
//! notification level 2.

use std::fs;

use anyhow::{Context, Result};

use crate::codec::{compress_into, decompress_into};
use crate::displaylevel;

// ─────────────────────────────────────────────────────────────────────────────
// Public result type
// ─────────────────────────────────────────────────────────────────────────────

/// Byte counts from a completed whole-file operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileResult {
    /// Bytes read from the source file.
    pub bytes_read: u64,
    /// Bytes written to the destination file.
    pub bytes_written: u64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Operations
// ─────────────────────────────────────────────────────────────────────────────

/// Compress `input_filename` into a container at `output_filename`.
pub fn compress_filename(input_filename: &str, output_filename: &str) -> Result<FileResult> {
    let input = fs::read(input_filename)
        .with_context(|| format!("cannot read input file '{input_filename}'"))?;

    let mut container = Vec::new();
    compress_into(&input, &mut container)
        .with_context(|| format!("cannot compress '{input_filename}'"))?;

    fs::write(output_filename, &container)
        .with_context(|| format!("cannot write output file '{output_filename}'"))?;

    let result = FileResult {
        bytes_read: input.len() as u64,
        bytes_written: container.len() as u64,
    };
    displaylevel!(
        2,
        "Compressed {} bytes into {} bytes ==> {:.2}% \n",
        result.bytes_read,
        result.bytes_written,
        ratio(result.bytes_written, result.bytes_read)
    );
    Ok(result)
}

/// Decompress the container at `input_filename` into `output_filename`.
pub fn decompress_filename(input_filename: &str, output_filename: &str) -> Result<FileResult> {
    let input = fs::read(input_filename)
        .with_context(|| format!("cannot read input file '{input_filename}'"))?;

    let mut decoded = Vec::new();
    decompress_into(&input, &mut decoded)
        .with_context(|| format!("cannot decompress '{input_filename}'"))?;

    fs::write(output_filename, &decoded)
        .with_context(|| format!("cannot write output file '{output_filename}'"))?;

    let result = FileResult {
        bytes_read: input.len() as u64,
        bytes_written: decoded.len() as u64,
    };
    displaylevel!(
        2,
        "Decompressed {} bytes into {} bytes \n",
        result.bytes_read,
        result.bytes_written
    );
    Ok(result)
}

fn ratio(written: u64, read: u64) -> f64 {
    if read == 0 {
        0.0
    } else {
        written as f64 / read as f64 * 100.0
    }
}
