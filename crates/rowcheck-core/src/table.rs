//! Tabular data model
//!
//! A [`Table`] is an ordered sequence of text rows. Row 0 is the header row;
//! everything below it is data. Tables are not required to be rectangular —
//! rows may be shorter than the header, and all consumers tolerate that.

use crate::error::{Error, Result};

/// A 2D table of text cells with a header row at index 0
///
/// ## Example
///
/// ```rust
/// use rowcheck_core::Table;
///
/// let table = Table::from_strs(&[
///     &["Name", "Email"],
///     &["Ada", "ada@example.com"],
/// ]);
///
/// assert_eq!(table.headers(), Some(&["Name".to_string(), "Email".to_string()][..]));
/// assert_eq!(table.cell(1, 1), Some("ada@example.com"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from owned rows (row 0 is the header row)
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Create a table from string slices
    ///
    /// Convenience constructor for literal tables.
    pub fn from_strs(rows: &[&[&str]]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        }
    }

    /// Whether the table has no rows at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of rows, header included
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The header row, if the table has one
    pub fn headers(&self) -> Option<&[String]> {
        self.rows.first().map(|row| row.as_slice())
    }

    /// A single row by 0-based index
    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(|r| r.as_slice())
    }

    /// All rows, header included
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Iterate over data rows (everything below the header) with their
    /// 0-based row indices
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .map(|(idx, row)| (idx, row.as_slice()))
    }

    /// A single cell, or `None` if the row is missing or too short
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(|s| s.as_str())
    }

    /// Overwrite a single cell in place
    pub fn set_cell(&mut self, row: usize, col: usize, value: impl Into<String>) -> Result<()> {
        let row_count = self.rows.len();
        let cells = self
            .rows
            .get_mut(row)
            .ok_or(Error::RowOutOfBounds(row, row_count))?;
        let cell_count = cells.len();
        let cell = cells
            .get_mut(col)
            .ok_or(Error::ColumnOutOfBounds(col, row, cell_count))?;
        *cell = value.into();
        Ok(())
    }
}
