// Unit tests for command-line argument parsing:
//   - the fixed [-c|-d] <input> <output> grammar
//   - every rejection path returns a "bad usage:" error

use lzkn64::cli::args::{parse_args_from, OpMode};

fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Accepted forms
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parse_compress() {
    let parsed = parse_args_from(&argv(&["-c", "in.bin", "out.lzkn64"])).unwrap();
    assert_eq!(parsed.op_mode, OpMode::Compress);
    assert_eq!(parsed.input_filename, "in.bin");
    assert_eq!(parsed.output_filename, "out.lzkn64");
}

#[test]
fn parse_decompress() {
    let parsed = parse_args_from(&argv(&["-d", "a", "b"])).unwrap();
    assert_eq!(parsed.op_mode, OpMode::Decompress);
}

// ─────────────────────────────────────────────────────────────────────────────
// Rejections
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn too_few_arguments() {
    assert!(parse_args_from(&argv(&[])).is_err());
    assert!(parse_args_from(&argv(&["-c"])).is_err());
    assert!(parse_args_from(&argv(&["-c", "in.bin"])).is_err());
}

#[test]
fn too_many_arguments() {
    assert!(parse_args_from(&argv(&["-c", "a", "b", "c"])).is_err());
}

#[test]
fn mode_without_dash_is_rejected() {
    let err = parse_args_from(&argv(&["c", "a", "b"])).unwrap_err();
    assert!(err.to_string().starts_with("bad usage:"), "{err}");
}

#[test]
fn unknown_mode_letter_is_rejected() {
    let err = parse_args_from(&argv(&["-x", "a", "b"])).unwrap_err();
    assert!(err.to_string().starts_with("bad usage:"), "{err}");
}

#[test]
fn errors_start_with_bad_usage() {
    for bad in [
        vec![],
        argv(&["-c"]),
        argv(&["-c", "a", "b", "c"]),
        argv(&["--compress", "a", "b"]),
    ] {
        let err = parse_args_from(&bad).unwrap_err();
        assert!(err.to_string().starts_with("bad usage:"), "{err}");
    }
}
