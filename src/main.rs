//! Binary entry point for the `lzkn64` command-line tool.
//!
//! Parses the fixed `[-c|-d] <input> <output>` argument form, dispatches
//! to the whole-file operations in [`lzkn64::io`], and maps any failure to
//! a non-zero exit code with a one-line diagnostic on stderr.

use lzkn64::cli::args::{parse_args, OpMode, ParsedArgs};
use lzkn64::cli::constants::{TOOL_NAME, USAGE_TEXT};
use lzkn64::io::{compress_filename, decompress_filename};

/// Execute the operation selected by argument parsing.
///
/// Returns the process exit code (0 = success, non-zero = error).
fn run(args: ParsedArgs) -> i32 {
    let result = match args.op_mode {
        OpMode::Compress => compress_filename(&args.input_filename, &args.output_filename),
        OpMode::Decompress => decompress_filename(&args.input_filename, &args.output_filename),
    };

    match result {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("{TOOL_NAME}: {e:#}");
            1
        }
    }
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprint!("{USAGE_TEXT}");
            eprintln!("{TOOL_NAME}: {e}");
            std::process::exit(1);
        }
    };

    std::process::exit(run(args));
}
