//! Command-line surface of the `lzkn64` tool: argument parsing, usage
//! text, and the stderr notification level.

pub mod args;
pub mod constants;

pub use args::{parse_args, parse_args_from, OpMode, ParsedArgs};
pub use constants::{display_level, set_display_level, TOOL_NAME, USAGE_TEXT};
