use thiserror::Error;

/// Errors from item extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("column '{column}' not found in dataset (available: {})", .available.join(", "))]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
