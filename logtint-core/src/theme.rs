use crate::ansi::ColorCode;
use crate::mapping::Rule;

// used when no mappings are given, in priority order
pub const DEFAULT_KEYWORD_COLORS: &[(&str, u8)] = &[
    ("ERROR", 196),   // bright red
    ("WARNING", 226), // bright yellow
    ("INFO", 33),     // blue
];

pub fn default_rules() -> Vec<Rule> {
    DEFAULT_KEYWORD_COLORS
        .iter()
        .map(|(keyword, index)| Rule::new(keyword, ColorCode::from_index(*index)))
        .collect()
}
