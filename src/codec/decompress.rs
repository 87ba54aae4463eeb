//! LZKN64 container decoding.
//!
//! A single forward pass over the token stream: read one command byte,
//! dispatch, append to the output, repeat until the declared container
//! length is consumed. The window copy reads from the output being built,
//! one byte at a time through the current write index, so a back-reference
//! whose length exceeds its distance repeats the bytes it has just written.
//!
//! Malformed or truncated input must return an error — it must never panic.
//! Every bounds condition of the format maps to a [`DecompressError`]
//! variant.

use thiserror::Error;

use super::types::{read_be24, Token, HEADER_SIZE};

/// Largest output a container can legitimately decode to: input sizes are
/// bounded by the 24-bit length field, so anything past this is malformed
/// and must not be allocated for.
const OUTPUT_LIMIT: usize = 0xFF_FFFF;

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by container decoding.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecompressError {
    /// The declared container length is smaller than the header or larger
    /// than the supplied input.
    #[error("malformed container header")]
    MalformedHeader,
    /// A token's operand or literal payload runs past the declared
    /// container length.
    #[error("truncated token stream")]
    TruncatedInput,
    /// A window copy reaches behind the start of the output.
    #[error("window copy before start of output")]
    BackReferenceUnderflow,
    /// The stream would decode to more than the format's 16 MiB − 1 bound.
    #[error("decoded output exceeds format bound")]
    OutputTooLarge,
}

#[inline]
fn grown(out_len: usize, add: usize) -> Result<usize, DecompressError> {
    let new_len = out_len + add;
    if new_len > OUTPUT_LIMIT {
        return Err(DecompressError::OutputTooLarge);
    }
    Ok(new_len)
}

// ─────────────────────────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────────────────────────

/// Decode a container into a freshly allocated buffer.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, DecompressError> {
    let mut out = Vec::new();
    decompress_into(input, &mut out)?;
    Ok(out)
}

/// Decode a container into `out`, replacing its contents.
///
/// Returns the number of decoded bytes.
pub fn decompress_into(input: &[u8], out: &mut Vec<u8>) -> Result<usize, DecompressError> {
    if input.len() < HEADER_SIZE {
        return Err(DecompressError::MalformedHeader);
    }
    let compressed_size = read_be24(&input[1..4]);
    if compressed_size < HEADER_SIZE || compressed_size > input.len() {
        return Err(DecompressError::MalformedHeader);
    }

    out.clear();
    let mut read = HEADER_SIZE;

    while read < compressed_size {
        let cmd = input[read];
        read += 1;

        // A 0x00 command byte with no room left for its operand is the
        // 16-bit alignment pad, not a truncated window copy: the encoder
        // never emits window copies shorter than 4 bytes, so a genuine
        // 0x00 command cannot end a well-formed stream.
        if cmd == 0x00 && read == compressed_size {
            break;
        }

        let operand = if Token::operand_len(cmd) == 1 {
            if read >= compressed_size {
                return Err(DecompressError::TruncatedInput);
            }
            let b = input[read];
            read += 1;
            b
        } else {
            0
        };

        match Token::unpack(cmd, operand) {
            Token::WindowCopy { len, dist } => {
                if dist == 0 || dist > out.len() {
                    return Err(DecompressError::BackReferenceUnderflow);
                }
                grown(out.len(), len)?;
                // Byte-by-byte through the current index: when len > dist
                // the source range includes bytes this loop has written.
                for _ in 0..len {
                    let byte = out[out.len() - dist];
                    out.push(byte);
                }
            }
            Token::RawCopy { len } => {
                if read + len > compressed_size {
                    return Err(DecompressError::TruncatedInput);
                }
                grown(out.len(), len)?;
                out.extend_from_slice(&input[read..read + len]);
                read += len;
            }
            Token::RleVal { len, value } => {
                let new_len = grown(out.len(), len)?;
                out.resize(new_len, value);
            }
            Token::RleZeroShort { len } | Token::RleZeroLong { len } => {
                let new_len = grown(out.len(), len)?;
                out.resize(new_len, 0x00);
            }
        }
    }

    Ok(out.len())
}
