//! crates/diag/src/render.rs
//! Pure line composition for every emitter kind.
//!
//! Each function returns one complete output line:
//! `<marker><TAG> [Fn:.. Fl:.. Ln:..] : <message><line-end>`. Nothing here
//! writes to a stream; the emitters in [`emit`](crate::emit) and
//! [`fatal`](crate::fatal) pass the composed line to a sink.

use std::fmt;

use style::{Marker, BG_DIM, BLUE, GREEN, LINE_END, RED, RESET, YELLOW};

use crate::callsite::CallSite;

/// Composes one line from its parts.
///
/// `condition` carries the literal condition text of an assertion line,
/// rendered in yellow between the tag and the position block.
fn line(
    marker: Marker,
    tag_color: &str,
    tag: &str,
    condition: Option<&str>,
    site: &CallSite,
    message_color: &str,
    message: fmt::Arguments<'_>,
) -> String {
    let condition = condition.map_or_else(String::new, |text| format!("{YELLOW}({text}) "));
    format!(
        "{prefix}{tag_color}{tag} {condition}{RESET}{BG_DIM}{site} : {message_color}{message}{LINE_END}",
        prefix = marker.prefix(),
    )
}

/// Error line (`ERR` tag, red text, error marker).
#[must_use]
pub fn error_line(site: &CallSite, message: fmt::Arguments<'_>) -> String {
    line(Marker::Error, RED, "ERR", None, site, RED, message)
}

/// Log line (`LOG` tag, blue text, ok marker).
#[must_use]
pub fn log_line(site: &CallSite, message: fmt::Arguments<'_>) -> String {
    line(Marker::Ok, BLUE, "LOG", None, site, BLUE, message)
}

/// Debug line (`DBG` tag, yellow text, ok marker).
#[must_use]
pub fn debug_line(site: &CallSite, message: fmt::Arguments<'_>) -> String {
    line(Marker::Ok, YELLOW, "DBG", None, site, YELLOW, message)
}

/// Abort-on-reach line (`TODO` tag, yellow message, error marker).
#[must_use]
pub fn todo_line(site: &CallSite, message: fmt::Arguments<'_>) -> String {
    line(Marker::Error, RED, "TODO", None, site, YELLOW, message)
}

/// Assertion failure line carrying the literal condition text.
#[must_use]
pub fn assert_failure_line(
    condition: &str,
    site: &CallSite,
    message: fmt::Arguments<'_>,
) -> String {
    line(
        Marker::Error,
        RED,
        "ASSERT",
        Some(condition),
        site,
        RED,
        message,
    )
}

/// Assertion success line, printed only at the debug tier.
#[must_use]
pub fn assert_success_line(
    condition: &str,
    site: &CallSite,
    message: fmt::Arguments<'_>,
) -> String {
    line(
        Marker::Ok,
        GREEN,
        "ASSERT",
        Some(condition),
        site,
        YELLOW,
        message,
    )
}

/// Timer line (`TIMER_CPU`/`TIMER_REAL` tag, dot marker).
///
/// Embeds the timer's name token and the elapsed seconds to six decimal
/// places; `note` is the caller's optional trailing annotation.
#[must_use]
pub fn timer_line(
    tag: &str,
    name: &str,
    site: &CallSite,
    elapsed_secs: f64,
    note: Option<fmt::Arguments<'_>>,
) -> String {
    let note = note.map_or_else(String::new, |note| format!(" : {BLUE}{note}"));
    format!(
        "{prefix}{BLUE}{tag} {RESET}{BG_DIM}({BLUE}{name}{RESET}{BG_DIM}) \
         {RESET}{BG_DIM}{site} : ({BLUE}{elapsed_secs:.6}s{RESET}{BG_DIM}){note}{LINE_END}",
        prefix = Marker::Dot.prefix(),
    )
}
