//! LZKN64 container compression and decompression.
//!
//! This module contains the core codec: the token model shared by both
//! directions, the single-pass decoder, and the greedy encoder.

pub mod compress;
pub mod decompress;
pub mod types;

// Re-export the most important public API items at the module level.
pub use compress::{compress, compress_into, CompressError, MAX_INPUT_SIZE};
pub use decompress::{decompress, decompress_into, DecompressError};
pub use types::{Token, COPY_SIZE, HEADER_SIZE, RLE_SIZE, WINDOW_SIZE};
