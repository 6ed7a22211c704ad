#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `diag` is a compile-time configurable diagnostics facility: colored
//! console emitters at three severity tiers ([`diag_error!`], [`diag_log!`],
//! [`diag_debug!`]), a fail-fast assertion with a configurable trap hook
//! ([`diag_assert!`]), an abort-on-reach primitive ([`diag_todo!`]), and two
//! stopwatches measuring process CPU time and monotonic wall-clock time
//! ([`timers::CpuTimer`], [`timers::RealTimer`]).
//!
//! # Design
//!
//! All gating happens at build time through cargo features. Each macro wraps
//! its body in a branch on a `pub const bool` derived from
//! `cfg!(feature = ...)`, so a disabled emitter accepts the same arguments,
//! evaluates none of them, and is removed entirely by constant folding and
//! dead-code elimination. There is no runtime verbosity state and no way to
//! reconfigure tiers after the build.
//!
//! Every emitted line follows one structure: a colored marker prefix, a level
//! tag, the call site as `[Fn:<function> Fl:<file> Ln:<line>]`, a colon, the
//! interpolated message, and a trailing glyph sequence. Error, assertion
//! failure, and abort lines go to standard error; everything else goes to
//! standard output.
//!
//! # Invariants
//!
//! - Severity emission never fails and never affects process state.
//! - A false assertion (with `assert-checks` on) and every [`diag_todo!`]
//!   reach invoke the trap hook and terminate the process; neither can be
//!   caught or retried.
//! - Style lookups and line composition are pure functions of the build
//!   configuration and their arguments.
//!
//! # Concurrency
//!
//! No lock is held around a line write. Each line is composed into a single
//! buffer and written with one call, but callers logging concurrently from
//! several threads rely on the platform stream's own guarantees and may see
//! byte-level interleaving.
//!
//! # Examples
//!
//! ```
//! use diag::{diag_log, diag_assert};
//!
//! let copied = 3;
//! diag_log!("copied {copied} files");
//! diag_assert!(copied > 0, "copy loop must make progress");
//! ```

pub mod callsite;
pub mod emit;
pub mod exit;
pub mod fatal;
pub mod render;
pub mod sink;
mod sys;
pub mod tier;
pub mod timers;
#[cfg(feature = "tracing")]
pub(crate) mod tracing_bridge;

pub use exit::ExitCode;
pub use tier::{
    Tier, ASSERT_CHECKS_ENABLED, DEBUG_ENABLED, ERROR_ENABLED, LOG_ENABLED, TIMERS_ENABLED,
};
