//! Tool identity, usage text, and the stderr notification level.

use std::sync::atomic::{AtomicU32, Ordering};

// ── Identity ──────────────────────────────────────────────────────────────────

/// Program name used in diagnostics.
pub const TOOL_NAME: &str = "lzkn64";

/// Usage text printed on argument errors.
pub const USAGE_TEXT: &str = "LZKN64 Compression and Decompression Utility\n\
\n\
lzkn64 [-c|-d] input output\n\
   -c: Compress the input file.\n\
   -d: Decompress the input file.\n";

// ── Notification level ────────────────────────────────────────────────────────
//
// 0 = silent; 1 = errors only; 2 = errors + per-file summary.
// The CLI surface carries no verbosity flag; the level is programmatic and
// mainly lowered by tests that want quiet operation.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current notification level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the notification level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Print to stderr.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
