//! Shared helpers for the probe-binary integration tests.

// Each test file compiles its own copy; not every file uses every helper.
#![allow(dead_code)]

use std::process::Output;

/// Runs the `dev-diag` probe with the given arguments.
pub fn probe(args: &[&str]) -> Output {
    assert_cmd::Command::cargo_bin("dev-diag")
        .expect("dev-diag probe binary must be built")
        .args(args)
        .output()
        .expect("failed to run dev-diag")
}

/// Drops `ESC [ .. m` sequences, leaving the printable text.
pub fn strip_ansi(bytes: &[u8]) -> String {
    let text = String::from_utf8(bytes.to_vec()).expect("probe output should be valid UTF-8");
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for follower in chars.by_ref() {
                if follower == 'm' {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain
}

/// Extracts the elapsed seconds from a stripped timer line, which embeds the
/// value as `: (<seconds>s)`.
pub fn parse_elapsed_secs(plain_line: &str) -> f64 {
    let start = plain_line
        .find(": (")
        .expect("timer line should contain the elapsed block");
    let rest = &plain_line[start + 3..];
    let end = rest
        .find("s)")
        .expect("elapsed block should close with `s)`");
    rest[..end]
        .parse()
        .expect("elapsed value should parse as seconds")
}
