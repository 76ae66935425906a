//! The validator contract
//!
//! Every validator is an independent, stateless pass over a table's rows:
//! it resolves its column by header text, inspects each data cell, and
//! reports flagged cells for the highlighting layer.

use std::collections::HashSet;

use crate::highlight::{FlaggedCell, HighlightColor};
use crate::table::Table;

/// A row-wise pass over a table
///
/// Implementations never panic and never propagate errors out of
/// [`validate`](Validator::validate): a missing column yields an empty
/// result (logged as a warning), and row-level failures are logged and
/// skipped so the pass always runs to completion.
pub trait Validator {
    /// Short name, used in log messages
    fn name(&self) -> &'static str;

    /// The color this validator tags flagged cells with
    fn highlight_color(&self) -> HighlightColor;

    /// Scan the table and report flagged cells
    ///
    /// `valid_pins` is a collaborator input accepted by every validator;
    /// the current validators do not consume it.
    ///
    /// The table is mutable because some validators rewrite cells in place
    /// (the call-note corrector); format validators leave it untouched.
    fn validate(&mut self, table: &mut Table, valid_pins: &HashSet<String>) -> Vec<FlaggedCell>;
}
