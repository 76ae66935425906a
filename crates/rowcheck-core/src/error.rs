//! Error types for rowcheck-core

use thiserror::Error;

/// Result type alias using [`Error`] by default
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur in rowcheck-core
#[derive(Debug, Error)]
pub enum Error {
    /// Row index out of bounds
    #[error("Row index {0} out of bounds (rows: {1})")]
    RowOutOfBounds(usize, usize),

    /// Column index out of bounds for a row
    #[error("Column index {0} out of bounds in row {1} (cells: {2})")]
    ColumnOutOfBounds(usize, usize, usize),
}
