//! crates/diag/src/callsite.rs
//! Call-site capture: enclosing function, source file, and line number.

use std::fmt;

use style::{BG_DIM, CYAN, RESET};

/// The position of one emitter invocation.
///
/// Captured by [`callsite!`](crate::callsite!) and consumed immediately to
/// format a single line; never stored. Rendering follows the fixed bracketed
/// layout `[Fn:<function> Fl:<file> Ln:<line>]`, with the three values in
/// cyan over the dim line background.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CallSite {
    function: &'static str,
    file: &'static str,
    line: u32,
}

impl CallSite {
    /// Creates a call site from values supplied by the calling environment.
    #[must_use]
    pub const fn new(function: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            function,
            file,
            line,
        }
    }

    /// The enclosing function's path.
    #[must_use]
    pub const fn function(&self) -> &'static str {
        self.function
    }

    /// The source file name.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// The source line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Fn:{CYAN}{}{RESET}{BG_DIM} Fl:{CYAN}{}{RESET}{BG_DIM} Ln:{CYAN}{}{RESET}{BG_DIM}]",
            self.function, self.file, self.line
        )
    }
}

/// Reduces the `type_name` of the probe item planted by
/// [`callsite!`](crate::callsite!) to the enclosing function's path.
///
/// Strips the probe's own `::__here` segment and any `::{{closure}}`
/// segments introduced when the macro expands inside a closure.
#[must_use]
pub fn trim_function_path(raw: &'static str) -> &'static str {
    let mut name = raw.strip_suffix("::__here").unwrap_or(raw);
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    name
}

/// Captures the current [`CallSite`].
///
/// The function name comes from the `type_name` of an item nested in the
/// enclosing function; file and line come from `file!()` and `line!()`.
/// Always succeeds, with no dynamic lookup.
#[macro_export]
macro_rules! callsite {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: &T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::callsite::CallSite::new(
            $crate::callsite::trim_function_path(__type_name_of(&__here)),
            ::std::file!(),
            ::std::line!(),
        )
    }};
}
