//! crates/diag/src/fatal.rs
//! Assertion checking and the abort-on-reach primitive.
//!
//! Both fatal paths print one line to standard error, invoke the trap hook,
//! and terminate the process. Nothing is unwound, caught, or retried;
//! embedding programs must not use these constructs on recoverable
//! conditions.

use std::fmt;
use std::process;
use std::sync::OnceLock;

use crate::callsite::CallSite;
use crate::emit::{write_stderr, write_stdout};
use crate::exit::ExitCode;
use crate::render;
use crate::sys;

/// A trap hook invoked just before fatal termination.
///
/// Defaults to [`default_trap`], which raises `SIGTRAP` on Unix so an
/// attached debugger stops at the failure point. Tests and embedding
/// programs that need to observe the exit code install a no-op stub instead.
pub type TrapHook = fn();

static TRAP_HOOK: OnceLock<TrapHook> = OnceLock::new();

/// The default trap: a debugger breakpoint via `SIGTRAP` on Unix, a no-op
/// elsewhere.
pub fn default_trap() {
    sys::raise_trap();
}

/// Installs the process-wide trap hook.
///
/// The hook can be installed once, before any fatal emitter runs; later
/// calls return `false` and leave the original hook in place, keeping the
/// configuration immutable after startup.
pub fn install_trap(hook: TrapHook) -> bool {
    TRAP_HOOK.set(hook).is_ok()
}

fn fire_trap() {
    let hook = TRAP_HOOK.get().copied().unwrap_or(default_trap);
    hook();
}

/// Prints the assertion failure line, fires the trap, and exits with code 1.
pub fn assertion_failed(condition: &str, site: &CallSite, message: fmt::Arguments<'_>) -> ! {
    write_stderr(&render::assert_failure_line(condition, site, message));
    fire_trap();
    process::exit(ExitCode::AssertFailure.as_i32());
}

/// Prints the assertion success line at the debug tier.
pub fn assertion_passed(condition: &str, site: &CallSite, message: fmt::Arguments<'_>) {
    write_stdout(&render::assert_success_line(condition, site, message));
}

/// Prints the `TODO` line, fires the trap, and exits with code 70.
///
/// Returning `!` lets the compiler treat every call as unreachable in a
/// successful run.
pub fn todo_unreachable(site: &CallSite, message: fmt::Arguments<'_>) -> ! {
    write_stderr(&render::todo_line(site, message));
    fire_trap();
    process::exit(ExitCode::Software.as_i32());
}

/// Checks `cond`, terminating the process with exit code 1 on failure.
///
/// With the `assert-checks` feature disabled the whole construct is a no-op
/// and `cond` is not evaluated, so the condition must be side-effect free.
/// On failure the emitted line carries the literal condition text, the call
/// position, and the interpolated message; the trap hook fires before the
/// process exits. On success at the debug tier a green success line goes to
/// standard output.
///
/// # Example
/// ```ignore
/// diag_assert!(queue.len() <= cap, "queue overflow: {} > {}", queue.len(), cap);
/// ```
#[macro_export]
macro_rules! diag_assert {
    ($cond:expr, $($arg:tt)*) => {
        if $crate::ASSERT_CHECKS_ENABLED {
            if !($cond) {
                $crate::fatal::assertion_failed(
                    ::std::stringify!($cond),
                    &$crate::callsite!(),
                    ::std::format_args!($($arg)*),
                );
            } else if $crate::DEBUG_ENABLED {
                $crate::fatal::assertion_passed(
                    ::std::stringify!($cond),
                    &$crate::callsite!(),
                    ::std::format_args!($($arg)*),
                );
            }
        }
    };
}

/// Marks a code path as unimplemented or unreachable.
///
/// Unconditional: it ignores the verbosity tier and every feature flag,
/// prints a `TODO` line to standard error, fires the trap hook, and exits
/// with the software-error code 70. Evaluates to `!`, so it can stand in
/// any expression position.
///
/// # Example
/// ```ignore
/// match frame {
///     Frame::Data(d) => handle(d),
///     Frame::Extension(_) => diag_todo!("extension frames"),
/// }
/// ```
#[macro_export]
macro_rules! diag_todo {
    ($($arg:tt)*) => {
        $crate::fatal::todo_unreachable(&$crate::callsite!(), ::std::format_args!($($arg)*))
    };
}
