//! # rowcheck-core
//!
//! Core data structures for the rowcheck row-validation library.
//!
//! This crate provides the types shared by all validators:
//! - [`Table`] - a ragged 2D text table with a header row
//! - [`CellRef`] - A1-style cell references for reporting
//! - [`HighlightColor`] and [`FlaggedCell`] - validator output records
//! - [`HeaderMatcher`] - column resolution by header synonym
//! - [`Validator`] - the uniform contract all validators implement
//!
//! ## Example
//!
//! ```rust
//! use rowcheck_core::{CellRef, HeaderMatcher, Table};
//!
//! let table = Table::from_strs(&[
//!     &["Name", "Email"],
//!     &["Ada", "ada@example.com"],
//! ]);
//!
//! let matcher = HeaderMatcher::new("email", &["email", "e-mail"]);
//! assert_eq!(matcher.resolve(&table), Some(1));
//! assert_eq!(CellRef::new(1, 1).to_string(), "B2");
//! ```

pub mod address;
pub mod error;
pub mod header;
pub mod highlight;
pub mod table;
pub mod validator;

// Re-exports for convenience
pub use address::CellRef;
pub use error::{Error, Result};
pub use header::HeaderMatcher;
pub use highlight::{FlaggedCell, HighlightColor};
pub use table::Table;
pub use validator::Validator;
