//! # logtint-core
//!
//! Keyword-driven colorizing for line-oriented text streams, meant to sit in a pipe
//! in front of a log viewer.
//!
//! ## Overview
//!
//! Two pieces run one after the other:
//!
//! - **[`parse_mappings`]**: turns a `KEYWORD:COLOR,KEYWORD:COLOR` string into an
//!   ordered list of [`Rule`]s, keeping every valid entry even when others are malformed
//! - **[`Colorizer`]**: reads lines, finds the first rule whose keyword appears in the
//!   line (case-insensitive) and writes the line wrapped in that rule's color
//!
//! Rule order is priority: when a line contains several keywords, the rule listed first
//! wins.
//!
//! ## Quick Start
//!
//! ```rust
//! use logtint_core::{Colorizer, parse_mappings};
//!
//! let parsed = parse_mappings("ERROR:196,WARNING:226");
//! assert!(parsed.combined_error().is_none());
//!
//! let colorizer = Colorizer::new(parsed.rules);
//! let mut out = Vec::new();
//! let report = colorizer
//!     .run("system WARNING: low disk\nall good\n".as_bytes(), &mut out)
//!     .unwrap();
//!
//! assert_eq!(report.lines_read, 2);
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "\x1b[38;5;226msystem WARNING: low disk\x1b[0m\nall good\n"
//! );
//! ```
//!
//! ## Color Codes
//!
//! A color value without the `38;` marker is a 256-color index and becomes
//! `ESC[38;5;<N>m`. A value that already contains `38;` is used verbatim, so full
//! custom directives such as `\x1b[1;38;2;255;0;0m` pass straight through.

pub mod ansi;
pub mod colorizer;
pub mod mapping;
pub mod theme;

// re-export commonly used types
pub use ansi::{ColorCode, RESET};
pub use colorizer::{ColorizeReport, Colorizer};
pub use mapping::{MappingError, MappingErrors, ParsedMappings, Rule, parse_mappings};
pub use theme::default_rules;
