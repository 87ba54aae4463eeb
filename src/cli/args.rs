//! Argument parsing for the `lzkn64` command line.
//!
//! The accepted grammar is fixed: a mode option (`-c` or `-d`) followed by
//! an input path and an output path, nothing else. The entry points are
//! [`parse_args`] (reads `std::env::args()`) and [`parse_args_from`]
//! (takes an explicit slice, callable from tests without touching
//! `std::env`). Bad input returns an `Err` whose message begins with
//! `"bad usage: "`.

use anyhow::{anyhow, Result};

// ── Public output types ───────────────────────────────────────────────────────

/// Operation selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    /// Compress the input file (`-c`).
    Compress,
    /// Decompress the input file (`-d`).
    Decompress,
}

/// Options and paths produced by a successful parse.
#[derive(Debug)]
pub struct ParsedArgs {
    /// Selected operation.
    pub op_mode: OpMode,
    /// Source path.
    pub input_filename: String,
    /// Destination path.
    pub output_filename: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse `std::env::args()` (skipping argv[0]).
pub fn parse_args() -> Result<ParsedArgs> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    parse_args_from(&argv)
}

/// Parse an explicit argument list: `[-c|-d] <input> <output>`.
pub fn parse_args_from(argv: &[String]) -> Result<ParsedArgs> {
    if argv.len() < 3 {
        return Err(anyhow!("bad usage: not enough arguments"));
    }
    if argv.len() > 3 {
        return Err(anyhow!("bad usage: too many arguments"));
    }

    let mode = argv[0].as_str();
    let op_mode = if let Some(letter) = mode.strip_prefix('-') {
        match letter {
            "c" => OpMode::Compress,
            "d" => OpMode::Decompress,
            _ => return Err(anyhow!("bad usage: unknown mode option '{mode}'")),
        }
    } else {
        return Err(anyhow!("bad usage: expected a mode option, -c or -d"));
    };

    Ok(ParsedArgs {
        op_mode,
        input_filename: argv[1].clone(),
        output_filename: argv[2].clone(),
    })
}
