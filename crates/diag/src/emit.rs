//! crates/diag/src/emit.rs
//! Severity emitters and their stream plumbing.
//!
//! The macros gate on the `pub const` booleans from [`tier`](crate::tier), so
//! an emitter below the compiled tier expands to a constant-false branch:
//! its arguments are never evaluated and the whole call is eliminated.

use std::fmt;
use std::io;

use crate::callsite::CallSite;
use crate::render;
use crate::sink::LineSink;

/// Writes one composed line to standard output, discarding write errors.
pub fn write_stdout(line: &str) {
    let stdout = io::stdout();
    let mut sink = LineSink::new(stdout.lock());
    // Diagnostics never fail the caller; a broken pipe loses the line.
    let _ = sink.write_line(line);
}

/// Writes one composed line to standard error, discarding write errors.
pub fn write_stderr(line: &str) {
    let stderr = io::stderr();
    let mut sink = LineSink::new(stderr.lock());
    let _ = sink.write_line(line);
}

/// Emits an error line to standard error.
pub fn emit_error(site: &CallSite, message: fmt::Arguments<'_>) {
    #[cfg(feature = "tracing")]
    crate::tracing_bridge::error(site, message);
    write_stderr(&render::error_line(site, message));
}

/// Emits a log line to standard output.
pub fn emit_log(site: &CallSite, message: fmt::Arguments<'_>) {
    #[cfg(feature = "tracing")]
    crate::tracing_bridge::log(site, message);
    write_stdout(&render::log_line(site, message));
}

/// Emits a debug line to standard output.
pub fn emit_debug(site: &CallSite, message: fmt::Arguments<'_>) {
    #[cfg(feature = "tracing")]
    crate::tracing_bridge::debug(site, message);
    write_stdout(&render::debug_line(site, message));
}

/// Prints an error line to standard error when the compiled tier is at least
/// [`Tier::Error`](crate::Tier::Error); otherwise compiles to nothing.
///
/// # Example
/// ```ignore
/// diag_error!("lost {} packets", dropped);
/// ```
#[macro_export]
macro_rules! diag_error {
    ($($arg:tt)*) => {
        if $crate::ERROR_ENABLED {
            $crate::emit::emit_error(&$crate::callsite!(), ::std::format_args!($($arg)*));
        }
    };
}

/// Prints a log line to standard output when the compiled tier is at least
/// [`Tier::Log`](crate::Tier::Log); otherwise compiles to nothing.
///
/// # Example
/// ```ignore
/// diag_log!("copied {} files", copied);
/// ```
#[macro_export]
macro_rules! diag_log {
    ($($arg:tt)*) => {
        if $crate::LOG_ENABLED {
            $crate::emit::emit_log(&$crate::callsite!(), ::std::format_args!($($arg)*));
        }
    };
}

/// Prints a debug line to standard output when the compiled tier is
/// [`Tier::Debug`](crate::Tier::Debug); otherwise compiles to nothing.
///
/// # Example
/// ```ignore
/// diag_debug!("queue state: {:?}", queue);
/// ```
#[macro_export]
macro_rules! diag_debug {
    ($($arg:tt)*) => {
        if $crate::DEBUG_ENABLED {
            $crate::emit::emit_debug(&$crate::callsite!(), ::std::format_args!($($arg)*));
        }
    };
}
