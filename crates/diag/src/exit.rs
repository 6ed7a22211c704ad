//! crates/diag/src/exit.rs
//! Exit codes used by the fatal emitters.
//!
//! The abort-on-reach code follows the BSD `sysexits.h` convention for
//! internal software errors (`EX_SOFTWARE`, 70) on every platform; there is
//! no per-platform remapping.

use std::fmt;

/// Exit codes produced by the fatal diagnostic paths.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum ExitCode {
    /// A checked assertion evaluated to false (generic failure, 1).
    AssertFailure = 1,
    /// An unimplemented or unreachable code path was executed
    /// (`EX_SOFTWARE`, 70).
    Software = 70,
}

impl ExitCode {
    /// Returns the numeric exit code.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Returns a short human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AssertFailure => "assertion failure",
            Self::Software => "internal software error",
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.as_i32())
    }
}
