#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `style` is the leaf crate of the dev-diag workspace: a fixed table of ANSI
//! escape sequences and the composed marker prefixes shared by every
//! diagnostic emitter. Nothing here performs I/O; the crate only names byte
//! sequences so the emitters in `diag` can assemble complete lines.
//!
//! # Design
//!
//! Each semantic style is a `pub const &str`. The compound markers
//! ([`Marker::prefix`]) and the trailing [`LINE_END`] glyph are likewise
//! constants, so a lookup is a pure function of the build configuration and
//! never of call history. The `blink` cargo feature controls whether the
//! error marker embeds blink on/off codes; with the feature disabled the
//! blink constants are empty strings rather than escape sequences, keeping
//! output clean on terminals that lack blink support.
//!
//! # Examples
//!
//! ```
//! use style::{Marker, Style};
//!
//! assert_eq!(Style::Red.code(), "\x1b[31m");
//! assert!(Marker::Error.prefix().contains('='));
//! ```

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";
/// Dim foreground (256-color palette entry 234).
pub const DIM: &str = "\x1b[38;5;234m";
/// Dim background (palette entry 234).
pub const BG_DIM: &str = "\x1b[48;5;234m";
/// Cyan foreground, used for call-site values.
pub const CYAN: &str = "\x1b[36m";
/// Blue foreground (palette entry 4), used for log and timer text.
pub const BLUE: &str = "\x1b[38;5;4m";
/// Green foreground, used for success text.
pub const GREEN: &str = "\x1b[32m";
/// Yellow foreground, used for debug text and condition literals.
pub const YELLOW: &str = "\x1b[33m";
/// Red foreground, used for error text.
pub const RED: &str = "\x1b[31m";
/// Near-black "white" foreground (palette entry 236) used by the marker caps.
pub const WHITE: &str = "\x1b[38;5;236m";
/// Marker body background (palette entry 236).
pub const BG_WHITE: &str = "\x1b[48;5;236m";

/// Blink on. Empty when the `blink` feature is disabled.
pub const BLINK: &str = if cfg!(feature = "blink") { "\x1b[5m" } else { "" };
/// Blink off. Empty when the `blink` feature is disabled.
pub const BLINK_OFF: &str = if cfg!(feature = "blink") {
    "\x1b[25m"
} else {
    ""
};

/// Trailing glyph sequence appended to every emitted line: reset, dim,
/// `◗`, newline, final reset.
pub const LINE_END: &str = "\x1b[0m\x1b[38;5;234m\u{25d7}\n\x1b[0m";

/// Semantic style names resolvable to their escape sequences.
///
/// Mirrors the named entries of the style table one-to-one; [`Style::code`]
/// is total and pure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Style {
    /// Attribute reset.
    Reset,
    /// Dim foreground.
    Dim,
    /// Dim background.
    BgDim,
    /// Cyan foreground.
    Cyan,
    /// Blue foreground.
    Blue,
    /// Green foreground.
    Green,
    /// Yellow foreground.
    Yellow,
    /// Red foreground.
    Red,
    /// Marker-cap foreground.
    White,
    /// Marker-body background.
    BgWhite,
    /// Blink on.
    Blink,
    /// Blink off.
    BlinkOff,
}

impl Style {
    /// Returns the escape sequence for this style.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Reset => RESET,
            Self::Dim => DIM,
            Self::BgDim => BG_DIM,
            Self::Cyan => CYAN,
            Self::Blue => BLUE,
            Self::Green => GREEN,
            Self::Yellow => YELLOW,
            Self::Red => RED,
            Self::White => WHITE,
            Self::BgWhite => BG_WHITE,
            Self::Blink => BLINK,
            Self::BlinkOff => BLINK_OFF,
        }
    }
}

/// Kind of marker glyph opening an emitted line.
///
/// Every line starts with a powerline-style capsule: a left cap (U+E0B6), a
/// colored body on the marker background, a reset, then a right cap (U+E0B0)
/// over the dim background that carries the rest of the line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Green body, used for success and informational lines.
    Ok,
    /// Blue body, used for timer lines.
    Dot,
    /// Red body with a blinking `×`, used for error and fatal lines.
    Error,
}

/// Composed ok-marker prefix.
pub const OK_MARKER: &str = concat!(
    "\x1b[38;5;236m\u{e0b6}\x1b[48;5;236m\x1b[32m-\u{f42e}-",
    "\x1b[0m\x1b[38;5;236m\x1b[48;5;234m\u{e0b0} ",
);

/// Composed dot-marker prefix.
pub const DOT_MARKER: &str = concat!(
    "\x1b[38;5;236m\u{e0b6}\x1b[48;5;236m\x1b[38;5;4m-\u{f42e}-",
    "\x1b[0m\x1b[38;5;236m\x1b[48;5;234m\u{e0b0} ",
);

/// Composed error-marker prefix.
pub const ERR_MARKER: &str = if cfg!(feature = "blink") {
    concat!(
        "\x1b[38;5;236m\u{e0b6}\x1b[48;5;236m\x1b[31m=\x1b[5m\u{d7}\x1b[25m=",
        "\x1b[0m\x1b[38;5;236m\x1b[48;5;234m\u{e0b0} ",
    )
} else {
    concat!(
        "\x1b[38;5;236m\u{e0b6}\x1b[48;5;236m\x1b[31m=\u{d7}=",
        "\x1b[0m\x1b[38;5;236m\x1b[48;5;234m\u{e0b0} ",
    )
};

impl Marker {
    /// Returns the fully composed line prefix for this marker kind.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Ok => OK_MARKER,
            Self::Dot => DOT_MARKER,
            Self::Error => ERR_MARKER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_stable_within_a_build() {
        for style in [
            Style::Reset,
            Style::Dim,
            Style::BgDim,
            Style::Cyan,
            Style::Blue,
            Style::Green,
            Style::Yellow,
            Style::Red,
            Style::White,
            Style::BgWhite,
            Style::Blink,
            Style::BlinkOff,
        ] {
            assert_eq!(style.code(), style.code());
        }
    }

    #[test]
    fn named_constants_match_enum_lookup() {
        assert_eq!(Style::Reset.code(), RESET);
        assert_eq!(Style::Dim.code(), DIM);
        assert_eq!(Style::BgDim.code(), BG_DIM);
        assert_eq!(Style::Cyan.code(), CYAN);
        assert_eq!(Style::Blue.code(), BLUE);
        assert_eq!(Style::Green.code(), GREEN);
        assert_eq!(Style::Yellow.code(), YELLOW);
        assert_eq!(Style::Red.code(), RED);
        assert_eq!(Style::White.code(), WHITE);
        assert_eq!(Style::BgWhite.code(), BG_WHITE);
    }

    #[test]
    fn ok_marker_is_built_from_table_entries() {
        let expected = format!("{WHITE}\u{e0b6}{BG_WHITE}{GREEN}-\u{f42e}-{RESET}{WHITE}{BG_DIM}\u{e0b0} ");
        assert_eq!(OK_MARKER, expected);
    }

    #[test]
    fn dot_marker_is_built_from_table_entries() {
        let expected = format!("{WHITE}\u{e0b6}{BG_WHITE}{BLUE}-\u{f42e}-{RESET}{WHITE}{BG_DIM}\u{e0b0} ");
        assert_eq!(DOT_MARKER, expected);
    }

    #[test]
    fn err_marker_is_built_from_table_entries() {
        let expected = format!(
            "{WHITE}\u{e0b6}{BG_WHITE}{RED}={BLINK}\u{d7}{BLINK_OFF}={RESET}{WHITE}{BG_DIM}\u{e0b0} "
        );
        assert_eq!(ERR_MARKER, expected);
    }

    #[test]
    fn line_end_is_built_from_table_entries() {
        let expected = format!("{RESET}{DIM}\u{25d7}\n{RESET}");
        assert_eq!(LINE_END, expected);
    }

    #[cfg(feature = "blink")]
    #[test]
    fn blink_codes_present_when_enabled() {
        assert_eq!(BLINK, "\x1b[5m");
        assert_eq!(BLINK_OFF, "\x1b[25m");
        assert!(ERR_MARKER.contains(BLINK));
    }

    #[cfg(not(feature = "blink"))]
    #[test]
    fn blink_codes_empty_when_disabled() {
        assert!(BLINK.is_empty());
        assert!(BLINK_OFF.is_empty());
        assert!(!ERR_MARKER.contains("\x1b[5m"));
    }

    #[test]
    fn marker_prefixes_end_over_the_dim_background() {
        for marker in [Marker::Ok, Marker::Dot, Marker::Error] {
            assert!(marker.prefix().ends_with("\u{e0b0} "));
            assert!(marker.prefix().contains(BG_DIM));
        }
    }
}
