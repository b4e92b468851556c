//! Vocabulary normalization and item frequency extraction.
//!
//! - **rules**: ordered per-column tables of raw key → canonical label
//! - **token**: exact / prefix / fallback normalization of one token
//! - **extract**: splitting multi-valued cells and counting labels

pub mod error;
pub mod extract;
pub mod rules;
pub mod token;

pub use error::{ExtractError, Result};
pub use extract::{
    ColumnExtraction, ExtractionStats, extract_items, extract_items_with_stats,
    extract_with_table,
};
pub use rules::{NormalizationTable, normalization_table, rules_for};
pub use token::{
    ITEM_SEPARATOR, MatchRule, NormalizedToken, capitalize_first, normalize_token, split_items,
};
