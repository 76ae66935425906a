//! # rowcheck
//!
//! Row-wise validators for tabular data (spreadsheet rows).
//!
//! Each validator scans a 2D table, locates its column by header text, and
//! reports flagged cells for a highlighting layer:
//!
//! - [`EmailValidator`] - RFC 5322 pattern plus structural checks, flags red
//! - [`PhoneValidator`] - multi-pattern matching with cleaning, flags red
//! - [`CallNoteValidator`] - rewrites notes via an external text-correction
//!   service (rate limited), flags rewritten cells yellow
//!
//! Validators share one contract ([`Validator`]) and one table model
//! ([`Table`]); none depends on another. [`ValidatorSet`] runs a whole set
//! over a table in one call.
//!
//! ## Example
//!
//! ```rust
//! use rowcheck::prelude::*;
//! use std::collections::HashSet;
//!
//! let mut table = Table::from_strs(&[
//!     &["Name", "Email", "Phone"],
//!     &["Ada", "ada@gmail.com", "123-456-7890"],
//!     &["Bad", "not-an-email", "12345"],
//! ]);
//!
//! let mut email = EmailValidator::new();
//! let flagged = email.validate(&mut table, &HashSet::new());
//!
//! assert_eq!(flagged.len(), 1);
//! assert_eq!(flagged[0].cell.to_string(), "B3");
//! assert_eq!(flagged[0].color.tag(), "red");
//! ```

pub mod prelude;
mod set;

pub use set::ValidatorSet;

// Re-export core types
pub use rowcheck_core::{
    CellRef,
    Error,
    FlaggedCell,
    HeaderMatcher,
    HighlightColor,
    Result,
    Table,
    Validator,
};

// Re-export the format validators
pub use rowcheck_validators::{EmailValidator, PhoneValidator};

// Re-export the call-note stack
pub use rowcheck_notes::{
    CallNoteValidator,
    ChatCorrector,
    CorrectorConfig,
    CorrectorError,
    CredentialsError,
    RateLimiter,
    TextCorrector,
};
