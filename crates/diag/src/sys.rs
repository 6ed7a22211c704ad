//! crates/diag/src/sys.rs
//! Platform calls kept behind a narrow safe surface: the default debugger
//! trap and the process CPU clock.

#![allow(unsafe_code)]

use std::time::Duration;

/// Raises `SIGTRAP`, breaking into an attached debugger.
///
/// Without a debugger attached the default signal disposition terminates the
/// process, which is the intended fail-fast behavior of the default hook.
#[cfg(unix)]
pub(crate) fn raise_trap() {
    // SAFETY: raise() is async-signal-safe and takes no pointers.
    unsafe {
        libc::raise(libc::SIGTRAP);
    }
}

/// No debugger-trap intrinsic is wired up on this platform.
#[cfg(not(unix))]
pub(crate) fn raise_trap() {}

/// CPU time consumed by the process so far.
#[cfg(unix)]
pub(crate) fn process_cpu_now() -> Duration {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    // SAFETY: ts is a valid out-pointer for the duration of the call.
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_PROCESS_CPUTIME_ID, &mut ts) };
    if rc == 0 {
        Duration::new(ts.tv_sec.unsigned_abs(), u32::try_from(ts.tv_nsec).unwrap_or(0))
    } else {
        Duration::ZERO
    }
}

/// Fallback for platforms without a per-process CPU clock: monotonic time
/// since an arbitrary epoch, documented as a wall-clock approximation.
#[cfg(not(unix))]
pub(crate) fn process_cpu_now() -> Duration {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed()
}
