//! Error types

use thiserror::Error;

/// Errors raised while configuring a table.
///
/// Row processing itself never fails; these only come out of the parsing
/// and construction helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("invalid page size {0}: expected one of 5, 10, 20, 50")]
    InvalidPageSize(usize),
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    #[error("column {0:?} cannot be filtered")]
    NotFilterable(String),
    #[error("invalid sort spec {0:?}: expected KEY, KEY:asc or KEY:desc")]
    InvalidSortSpec(String),
}
