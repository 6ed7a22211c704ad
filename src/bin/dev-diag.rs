#![deny(unsafe_code)]

//! Probe binary for the dev-diag workspace.
//!
//! Each subcommand drives one emitter end to end so the integration tests
//! can observe stream routing, line contents, and process exit codes from
//! outside the library. The trap hook is replaced with a no-op stub up
//! front; the default SIGTRAP hook would kill the process before the fatal
//! emitters reach their exit codes.

use std::env;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use diag::{
    diag_assert, diag_debug, diag_error, diag_log, diag_todo, timer_cpu_end, timer_cpu_start,
    timer_real_end, timer_real_start,
};

fn print_usage(program: &str) {
    println!("dev-diag probe");
    println!("Usage:");
    println!("  {program} <command>");
    println!();
    println!("Commands:");
    println!("  error        emit one ERR line to stderr");
    println!("  log          emit one LOG line to stdout");
    println!("  debug        emit one DBG line to stdout");
    println!("  assert-pass  run a passing assertion");
    println!("  assert-fail  run a failing assertion (exits 1)");
    println!("  todo         hit an abort-on-reach marker (exits 70)");
    println!("  timer-cpu    time a busy loop with the CPU stopwatch");
    println!("  timer-real   time a short sleep with the wall stopwatch");
}

fn run_error() {
    diag_error!("probe error {}", 42);
}

fn run_log() {
    diag_log!("copied {} files", 3);
}

fn run_debug() {
    diag_debug!("queue depth {}", 7);
}

fn run_assert_pass() {
    let lanes = 2 + 2;
    diag_assert!(lanes == 4, "expected {} lanes", 4);
}

fn run_assert_fail() {
    let (have, want) = (1, 2);
    diag_assert!(have > want, "expected {have} to exceed {want}");
}

fn run_todo() -> ! {
    diag_todo!("renegotiation path");
}

fn run_timer_cpu() {
    let timer = timer_cpu_start!(spin);
    let mut acc = 0u64;
    for i in 0..400_000u64 {
        acc = acc.wrapping_add(i.wrapping_mul(13));
    }
    std::hint::black_box(acc);
    timer_cpu_end!(timer, "{} rounds", 400_000);
}

fn run_timer_real() {
    let timer = timer_real_start!(nap);
    thread::sleep(Duration::from_millis(15));
    timer_real_end!(timer);
}

fn noop_trap() {}

fn main() -> ExitCode {
    diag::fatal::install_trap(noop_trap);

    let program = env::args().next().unwrap_or_else(|| "dev-diag".to_string());
    let command = env::args().nth(1);
    match command.as_deref() {
        Some("error") => run_error(),
        Some("log") => run_log(),
        Some("debug") => run_debug(),
        Some("assert-pass") => run_assert_pass(),
        Some("assert-fail") => run_assert_fail(),
        Some("todo") => run_todo(),
        Some("timer-cpu") => run_timer_cpu(),
        Some("timer-real") => run_timer_real(),
        Some("--help" | "-h" | "help") | None => print_usage(&program),
        Some(other) => {
            eprintln!("unknown command: {other}");
            print_usage(&program);
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
