//! Parsing of `KEYWORD:COLOR` mapping lists into colorizing rules.
//!
//! Parsing is best-effort: every well-formed entry becomes a [`Rule`], malformed
//! entries are collected as [`MappingError`]s and reported together, so one typo
//! does not throw away the rest of the configuration.

use crate::ansi::ColorCode;

const ENTRY_SEPARATOR: char = ',';
const FIELD_SEPARATOR: char = ':';

/// A keyword and the color applied to lines containing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// upper-cased so matching against an upper-cased line is case-insensitive
    pub keyword: String,
    pub color: ColorCode,
}

impl Rule {
    pub fn new(keyword: &str, color: ColorCode) -> Self {
        Self {
            keyword: keyword.trim().to_uppercase(),
            color,
        }
    }

    /// `normalized_line` must already be upper-cased.
    pub fn matches(&self, normalized_line: &str) -> bool {
        normalized_line.contains(&self.keyword)
    }
}

/// A single malformed entry of a mapping list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    #[error("invalid mapping: {0}")]
    InvalidMapping(String),

    #[error("invalid mapping: {0} (empty color)")]
    EmptyColor(String),
}

impl MappingError {
    /// The offending entry, trimmed, as it appeared in the input.
    pub fn entry(&self) -> &str {
        match self {
            Self::InvalidMapping(entry) | Self::EmptyColor(entry) => entry,
        }
    }
}

/// Every malformed entry of one mapping list, displayed as a single `"; "` joined message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_messages(.0))]
pub struct MappingErrors(pub Vec<MappingError>);

fn join_messages(errors: &[MappingError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Outcome of [`parse_mappings`]: the usable rules and the entries that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedMappings {
    pub rules: Vec<Rule>,
    pub errors: Vec<MappingError>,
}

impl ParsedMappings {
    /// `None` when every non-empty entry parsed.
    pub fn combined_error(&self) -> Option<MappingErrors> {
        if self.errors.is_empty() {
            None
        } else {
            Some(MappingErrors(self.errors.clone()))
        }
    }
}

/// Parse `KEYWORD1:COLOR1,KEYWORD2:COLOR2,...` into rules, keeping input order.
///
/// Empty entries are skipped. An entry that does not split into exactly two
/// `:`-separated fields, or whose color is blank, is recorded as an error
/// and left out of the rules. Parsing always continues with the next entry.
pub fn parse_mappings(input: &str) -> ParsedMappings {
    let mut parsed = ParsedMappings::default();

    for entry in input.split(ENTRY_SEPARATOR) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        match parse_entry(entry) {
            Ok(rule) => parsed.rules.push(rule),
            Err(e) => {
                log::debug!("Skipping mapping entry: {}", e);
                parsed.errors.push(e);
            }
        }
    }

    log::debug!(
        "Parsed {} rule(s), {} malformed entr(ies)",
        parsed.rules.len(),
        parsed.errors.len()
    );

    parsed
}

fn parse_entry(entry: &str) -> Result<Rule, MappingError> {
    let parts: Vec<&str> = entry.split(FIELD_SEPARATOR).collect();
    let [keyword, color] = parts.as_slice() else {
        return Err(MappingError::InvalidMapping(entry.to_string()));
    };

    let color = color.trim();
    if color.is_empty() {
        return Err(MappingError::EmptyColor(entry.to_string()));
    }

    Ok(Rule::new(keyword, ColorCode::parse(color)))
}
