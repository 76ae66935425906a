//! Column resolution by header synonym
//!
//! Each validator targets one semantic field (email, phone, call note) and
//! locates its column by matching header text against a fixed synonym set.

use crate::table::Table;

/// Maps a canonical field to its accepted header synonyms
///
/// Headers are compared trimmed and lowercased; the first matching column
/// wins. Synonyms must be listed lowercase.
#[derive(Debug, Clone, Copy)]
pub struct HeaderMatcher {
    field: &'static str,
    synonyms: &'static [&'static str],
}

impl HeaderMatcher {
    /// Create a matcher for a canonical field
    pub const fn new(field: &'static str, synonyms: &'static [&'static str]) -> Self {
        Self { field, synonyms }
    }

    /// Canonical field name, used in log messages
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Resolve the column index in a table, if any header matches
    ///
    /// Returns `None` when the table has no header row or no header matches;
    /// the caller decides how to report that (validators log a warning and
    /// produce an empty result).
    pub fn resolve(&self, table: &Table) -> Option<usize> {
        let headers = table.headers()?;
        headers.iter().position(|h| {
            let h = h.trim().to_lowercase();
            self.synonyms.iter().any(|s| *s == h)
        })
    }
}
