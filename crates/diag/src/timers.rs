//! crates/diag/src/timers.rs
//! Elapsed-time stopwatches: process CPU time and monotonic wall-clock time.
//!
//! Start returns a handle that the matching end call consumes, so two
//! overlapping timers with different names are independent and a name can
//! never be silently shadowed. The macros wrap the handle in an `Option`
//! gated on [`TIMERS_ENABLED`](crate::TIMERS_ENABLED); with the `timers`
//! feature off both start and end compile to nothing.

use std::fmt;
use std::time::{Duration, Instant};

use crate::callsite::CallSite;
use crate::emit::write_stdout;
use crate::render;
use crate::sys;

/// Stopwatch over CPU time consumed by the process.
///
/// On Unix the readings come from `CLOCK_PROCESS_CPUTIME_ID`; elsewhere a
/// monotonic wall clock stands in and the difference is documented rather
/// than hidden.
#[derive(Clone, Debug)]
pub struct CpuTimer {
    name: &'static str,
    start: Duration,
}

impl CpuTimer {
    /// Starts a CPU stopwatch under the given name token.
    #[must_use]
    pub fn start(name: &'static str) -> Self {
        Self {
            name,
            start: sys::process_cpu_now(),
        }
    }

    /// The name token binding this start to its end call.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Elapsed CPU seconds since the start call.
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        sys::process_cpu_now()
            .checked_sub(self.start)
            .unwrap_or_default()
            .as_secs_f64()
    }

    /// Stops the timer and prints its line to standard output.
    pub fn stop(self, site: &CallSite) {
        let line = render::timer_line("TIMER_CPU", self.name, site, self.elapsed_secs(), None);
        write_stdout(&line);
    }

    /// Stops the timer and prints its line with a trailing annotation.
    pub fn stop_with(self, site: &CallSite, note: fmt::Arguments<'_>) {
        let line = render::timer_line(
            "TIMER_CPU",
            self.name,
            site,
            self.elapsed_secs(),
            Some(note),
        );
        write_stdout(&line);
    }
}

/// Stopwatch over monotonic wall-clock time.
#[derive(Clone, Debug)]
pub struct RealTimer {
    name: &'static str,
    start: Instant,
}

impl RealTimer {
    /// Starts a wall-clock stopwatch under the given name token.
    #[must_use]
    pub fn start(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    /// The name token binding this start to its end call.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Elapsed wall-clock seconds since the start call.
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Stops the timer and prints its line to standard output.
    pub fn stop(self, site: &CallSite) {
        let line = render::timer_line("TIMER_REAL", self.name, site, self.elapsed_secs(), None);
        write_stdout(&line);
    }

    /// Stops the timer and prints its line with a trailing annotation.
    pub fn stop_with(self, site: &CallSite, note: fmt::Arguments<'_>) {
        let line = render::timer_line(
            "TIMER_REAL",
            self.name,
            site,
            self.elapsed_secs(),
            Some(note),
        );
        write_stdout(&line);
    }
}

/// Starts a CPU stopwatch, yielding `Some(handle)` when timers are compiled
/// in and `None` otherwise.
///
/// # Example
/// ```ignore
/// let t = timer_cpu_start!(parse);
/// parse_everything();
/// timer_cpu_end!(t, "parsed {} entries", count);
/// ```
#[macro_export]
macro_rules! timer_cpu_start {
    ($name:ident) => {
        if $crate::TIMERS_ENABLED {
            ::std::option::Option::Some($crate::timers::CpuTimer::start(::std::stringify!(
                $name
            )))
        } else {
            ::std::option::Option::None
        }
    };
}

/// Ends a CPU stopwatch started by [`timer_cpu_start!`], printing the
/// elapsed seconds and an optional annotation.
#[macro_export]
macro_rules! timer_cpu_end {
    ($timer:expr) => {
        if let ::std::option::Option::Some(__timer) = $timer {
            __timer.stop(&$crate::callsite!());
        }
    };
    ($timer:expr, $($arg:tt)*) => {
        if let ::std::option::Option::Some(__timer) = $timer {
            __timer.stop_with(&$crate::callsite!(), ::std::format_args!($($arg)*));
        }
    };
}

/// Starts a wall-clock stopwatch, yielding `Some(handle)` when timers are
/// compiled in and `None` otherwise.
#[macro_export]
macro_rules! timer_real_start {
    ($name:ident) => {
        if $crate::TIMERS_ENABLED {
            ::std::option::Option::Some($crate::timers::RealTimer::start(::std::stringify!(
                $name
            )))
        } else {
            ::std::option::Option::None
        }
    };
}

/// Ends a wall-clock stopwatch started by [`timer_real_start!`].
#[macro_export]
macro_rules! timer_real_end {
    ($timer:expr) => {
        if let ::std::option::Option::Some(__timer) = $timer {
            __timer.stop(&$crate::callsite!());
        }
    };
    ($timer:expr, $($arg:tt)*) => {
        if let ::std::option::Option::Some(__timer) = $timer {
            __timer.stop_with(&$crate::callsite!(), ::std::format_args!($($arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn real_timer_approximates_the_slept_interval() {
        let timer = RealTimer::start("nap");
        thread::sleep(Duration::from_millis(20));
        let elapsed = timer.elapsed_secs();
        assert!(elapsed >= 0.020, "elapsed {elapsed} shorter than the sleep");
        assert!(elapsed < 5.0, "elapsed {elapsed} implausibly long");
    }

    #[test]
    fn cpu_timer_is_monotonic_non_negative() {
        let timer = CpuTimer::start("spin");
        let mut acc = 0u64;
        for i in 0..500_000u64 {
            acc = acc.wrapping_add(i.wrapping_mul(7));
        }
        std::hint::black_box(acc);
        let first = timer.elapsed_secs();
        let second = timer.elapsed_secs();
        assert!(first >= 0.0);
        assert!(second >= first);
    }

    #[test]
    fn overlapping_timers_are_independent() {
        let outer = RealTimer::start("outer");
        thread::sleep(Duration::from_millis(15));
        let inner = RealTimer::start("inner");
        thread::sleep(Duration::from_millis(5));

        let inner_elapsed = inner.elapsed_secs();
        let outer_elapsed = outer.elapsed_secs();
        assert!(outer_elapsed > inner_elapsed);
        assert_eq!(outer.name(), "outer");
        assert_eq!(inner.name(), "inner");
    }

    #[test]
    fn start_macros_carry_the_name_token() {
        let cpu = crate::timer_cpu_start!(stage_one);
        let real = crate::timer_real_start!(stage_two);
        if crate::TIMERS_ENABLED {
            assert_eq!(cpu.as_ref().map(CpuTimer::name), Some("stage_one"));
            assert_eq!(real.as_ref().map(RealTimer::name), Some("stage_two"));
        } else {
            assert!(cpu.is_none());
            assert!(real.is_none());
        }
    }
}
