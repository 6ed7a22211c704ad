//! tests/timer_lines.rs
//! Elapsed-time lines printed by the stopwatch emitters.

mod util;

use util::{parse_elapsed_secs, probe, strip_ansi};

#[test]
fn cpu_timer_reports_the_named_stopwatch_with_an_annotation() {
    let output = probe(&["timer-cpu"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty(), "timer lines go to stdout");

    let stdout = strip_ansi(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "{stdout:?}");
    assert!(lines[0].contains("TIMER_CPU (spin)"), "{stdout:?}");
    assert!(lines[0].contains("400000 rounds"), "{stdout:?}");

    let elapsed = parse_elapsed_secs(lines[0]);
    assert!(elapsed >= 0.0, "{elapsed}");
    assert!(elapsed < 60.0, "implausible CPU time: {elapsed}");
}

#[test]
fn real_timer_covers_at_least_the_slept_interval() {
    let output = probe(&["timer-real"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());

    let stdout = strip_ansi(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "{stdout:?}");
    assert!(lines[0].contains("TIMER_REAL (nap)"), "{stdout:?}");

    let elapsed = parse_elapsed_secs(lines[0]);
    assert!(elapsed >= 0.015, "elapsed {elapsed} shorter than the sleep");
    assert!(elapsed < 30.0, "implausible wall time: {elapsed}");
}

#[test]
fn elapsed_value_is_printed_to_six_decimal_places() {
    let output = probe(&["timer-real"]);
    let stdout = strip_ansi(&output.stdout);
    let line = stdout.lines().next().expect("one timer line");

    let start = line.find(": (").expect("elapsed block present") + 3;
    let end = start + line[start..].find("s)").expect("elapsed block closed");
    let digits = &line[start..end];
    let (_, frac) = digits.split_once('.').expect("fractional seconds");
    assert_eq!(frac.len(), 6, "six decimal places: {digits:?}");
}
