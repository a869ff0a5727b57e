//! ANSI color directives and escape-sequence handling.

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;

/// Substring that marks a value as a complete extended-color directive.
pub const EXTENDED_COLOR_MARKER: &str = "38;";

/// Restores default terminal styling.
pub const RESET: &str = "\x1b[0m";

lazy_static! {
    // CSI sequences (ESC [ params intermediates final) and stray ESC bytes
    static ref ESCAPE_SEQUENCE_RE: Regex =
        Regex::new(r"\x1b(?:\[[0-?]*[ -/]*[@-~])?").unwrap();
}

/// A complete terminal styling directive, ready to be written before a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCode(String);

impl ColorCode {
    /// 256-color foreground directive for `index`.
    pub fn from_index(index: u8) -> Self {
        Self(format!("\x1b[38;5;{}m", index))
    }

    /// Build a directive from a user supplied color value.
    ///
    /// Values containing [`EXTENDED_COLOR_MARKER`] are kept verbatim, anything else is
    /// treated as a 256-color index and wrapped into `ESC[38;5;<value>m`. The value is
    /// not validated beyond that, so `"999"` produces a directive the terminal ignores.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.contains(EXTENDED_COLOR_MARKER) {
            Self(value.to_string())
        } else {
            Self(format!("\x1b[38;5;{}m", value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Remove terminal escape sequences so only visible text is left.
///
/// Borrows the input when it contains no escape byte.
pub fn strip_escapes(s: &str) -> Cow<'_, str> {
    if !s.contains('\x1b') {
        return Cow::Borrowed(s);
    }
    ESCAPE_SEQUENCE_RE.replace_all(s, "")
}
