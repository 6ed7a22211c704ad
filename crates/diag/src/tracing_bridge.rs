//! crates/diag/src/tracing_bridge.rs
//! Forwards active emitter output to the `tracing` crate.
//!
//! Enabled by the `tracing` cargo feature. Each severity emitter mirrors its
//! message, uncolored, as a tracing event at the matching level so programs
//! already running a subscriber can collect console diagnostics alongside
//! their structured telemetry. Purely additive: the console line is still
//! printed, and nothing here consults the subscriber's filter.

use std::fmt;

use crate::callsite::CallSite;

pub(crate) fn error(site: &CallSite, message: fmt::Arguments<'_>) {
    tracing::error!(
        target: "diag::error",
        function = site.function(),
        file = site.file(),
        line = site.line(),
        "{}",
        message
    );
}

pub(crate) fn log(site: &CallSite, message: fmt::Arguments<'_>) {
    tracing::info!(
        target: "diag::log",
        function = site.function(),
        file = site.file(),
        line = site.line(),
        "{}",
        message
    );
}

pub(crate) fn debug(site: &CallSite, message: fmt::Arguments<'_>) {
    tracing::debug!(
        target: "diag::debug",
        function = site.function(),
        file = site.file(),
        line = site.line(),
        "{}",
        message
    );
}
