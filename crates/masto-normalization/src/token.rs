//! Normalization of single free-text tokens.

use serde::{Deserialize, Serialize};

use crate::rules::NormalizationTable;

/// Separator between items inside one multi-valued cell.
pub const ITEM_SEPARATOR: char = ',';

/// Which rule produced a normalized label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// Lowercased token equals a table key.
    Exact,
    /// Lowercased token starts with a table key.
    Prefix,
    /// No key matched; the token was capitalized.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedToken {
    pub label: String,
    pub rule: MatchRule,
}

/// Uppercases the first character and keeps the rest.
///
/// Tokens of at most one character are uppercased entirely.
pub fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => {
            let mut capitalized: String = first.to_uppercase().collect();
            capitalized.push_str(chars.as_str());
            capitalized
        }
        None => String::new(),
    }
}

/// Maps one raw token to its canonical label.
pub fn normalize_token(table: &NormalizationTable, token: &str) -> NormalizedToken {
    let key = token.to_lowercase();
    if let Some(label) = table.exact(&key) {
        return NormalizedToken {
            label: label.to_string(),
            rule: MatchRule::Exact,
        };
    }
    if let Some(label) = table.prefix(&key) {
        return NormalizedToken {
            label: label.to_string(),
            rule: MatchRule::Prefix,
        };
    }
    NormalizedToken {
        label: capitalize_first(token),
        rule: MatchRule::Fallback,
    }
}

/// Splits a multi-valued cell into trimmed raw tokens.
///
/// Empty tokens between consecutive separators are kept.
pub fn split_items(cell: &str) -> impl Iterator<Item = &str> {
    cell.split(ITEM_SEPARATOR).map(str::trim)
}
