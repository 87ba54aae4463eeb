// LZKN64 compression and decompression

pub mod cli;
pub mod codec;
pub mod corpus;
pub mod io;

// ─────────────────────────────────────────────────────────────────────────────
// Top-level convenience re-exports for the most common API entry points.
// ─────────────────────────────────────────────────────────────────────────────

/// One-shot compression into a freshly allocated container.
pub use codec::compress::compress;
/// One-shot compression into a caller-provided growable buffer.
pub use codec::compress::compress_into;
/// One-shot decompression into a freshly allocated buffer.
pub use codec::decompress::decompress;
/// One-shot decompression into a caller-provided growable buffer.
pub use codec::decompress::decompress_into;

/// Error type for compression operations.
pub use codec::compress::CompressError;
/// Error type for decompression operations.
pub use codec::decompress::DecompressError;

/// Maximum input size the encoder accepts.
pub use codec::compress::MAX_INPUT_SIZE;
