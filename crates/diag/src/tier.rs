//! crates/diag/src/tier.rs
//! Verbosity tiers and the compile-time gate constants derived from them.

use std::fmt;

/// Process-wide verbosity tier, fixed at build time.
///
/// Tiers are totally ordered; an emitter at tier `T` is active iff the
/// compiled tier is at least `T`. The compiled tier is the highest enabled
/// `level-*` cargo feature, and the features are additive (`level-debug`
/// implies `level-log` implies `level-error`), so the ordering cannot be
/// violated by feature selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Tier {
    /// No diagnostic output at all.
    Silent = 0,
    /// Error lines only.
    Error = 1,
    /// Error and log lines.
    Log = 2,
    /// Error, log, and debug lines, plus assertion success lines.
    Debug = 3,
}

impl Tier {
    /// The tier this build was compiled with.
    pub const COMPILED: Self = Self::compiled();

    /// Resolves the compiled tier from the cargo feature set.
    #[must_use]
    pub const fn compiled() -> Self {
        if cfg!(feature = "level-debug") {
            Self::Debug
        } else if cfg!(feature = "level-log") {
            Self::Log
        } else if cfg!(feature = "level-error") {
            Self::Error
        } else {
            Self::Silent
        }
    }

    /// Returns the tier's numeric value.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns `true` when output at `emitter` tier is active under `self`.
    #[must_use]
    pub const fn allows(self, emitter: Self) -> bool {
        self.as_u8() >= emitter.as_u8()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Silent => "silent",
            Self::Error => "error",
            Self::Log => "log",
            Self::Debug => "debug",
        };
        f.write_str(name)
    }
}

/// `true` when error lines are compiled in (tier > 0).
pub const ERROR_ENABLED: bool = cfg!(feature = "level-error");
/// `true` when log lines are compiled in (tier > 1).
pub const LOG_ENABLED: bool = cfg!(feature = "level-log");
/// `true` when debug lines and assertion success lines are compiled in
/// (tier > 2).
pub const DEBUG_ENABLED: bool = cfg!(feature = "level-debug");
/// `true` when `diag_assert!` evaluates its condition.
pub const ASSERT_CHECKS_ENABLED: bool = cfg!(feature = "assert-checks");
/// `true` when the stopwatch emitters are compiled in.
pub const TIMERS_ENABLED: bool = cfg!(feature = "timers");
