//! Email format validation

use std::collections::HashSet;

use regex::Regex;
use rowcheck_core::{CellRef, FlaggedCell, HeaderMatcher, HighlightColor, Table, Validator};

/// RFC 5322 address pattern, covering the dotted-atom and quoted-string
/// local-part forms and bracketed IPv4 domain literals. Anchored for
/// full-string matching; `(?i)` because addresses are case-insensitive.
const EMAIL_PATTERN: &str = r#"(?i)^(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?|\[(?:(?:(2(5[0-5]|[0-4][0-9])|1[0-9][0-9]|[1-9]?[0-9]))\.){3}(?:(2(5[0-5]|[0-4][0-9])|1[0-9][0-9]|[1-9]?[0-9])|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])$"#;

const EMAIL_HEADERS: &[&str] = &["email", "e-mail", "email address", "e-mail address"];

/// Providers considered common; anything else is accepted but logged.
const COMMON_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "aol.com",
    "icloud.com",
    "protonmail.com",
    "zoho.com",
];

/// Validates email addresses in the email column
///
/// Invalid entries are flagged red. Cells are checked against the RFC 5322
/// pattern plus structural limits: local part at most 64 characters, domain
/// at most 255, no trailing dot on the domain.
pub struct EmailValidator {
    matcher: HeaderMatcher,
    pattern: Regex,
}

impl EmailValidator {
    /// Create a new email validator
    pub fn new() -> Self {
        Self {
            matcher: HeaderMatcher::new("email", EMAIL_HEADERS),
            pattern: Regex::new(EMAIL_PATTERN).expect("email pattern is valid"),
        }
    }

    /// Validate a single address, with checks beyond the pattern
    fn is_valid_email(&self, email: &str) -> bool {
        if !self.pattern.is_match(email) {
            return false;
        }

        let Some((local, domain)) = email.rsplit_once('@') else {
            return false;
        };

        if local.len() > 64 {
            return false;
        }
        if domain.len() > 255 {
            return false;
        }
        if domain.ends_with('.') {
            return false;
        }

        // Valid either way; uncommon providers are only worth a log line
        let domain_lower = domain.to_lowercase();
        if !COMMON_DOMAINS.iter().any(|d| *d == domain_lower) {
            tracing::info!("Uncommon email domain found: {domain}");
        }

        true
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for EmailValidator {
    fn name(&self) -> &'static str {
        "email"
    }

    fn highlight_color(&self) -> HighlightColor {
        HighlightColor::Red
    }

    fn validate(&mut self, table: &mut Table, _valid_pins: &HashSet<String>) -> Vec<FlaggedCell> {
        let mut flagged = Vec::new();
        if table.is_empty() {
            return flagged;
        }

        let Some(col_idx) = self.matcher.resolve(table) else {
            tracing::warn!("Email column not found");
            return flagged;
        };

        for (row_idx, row) in table.data_rows() {
            // Rows shorter than the email column are skipped
            let Some(email) = row.get(col_idx) else {
                continue;
            };

            let email = email.trim();
            if email.is_empty() {
                continue;
            }

            if !self.is_valid_email(email) {
                let cell = CellRef::new(row_idx, col_idx);
                tracing::info!("Invalid email found in {cell}: {email}");
                flagged.push(FlaggedCell::new(cell, HighlightColor::Red));
            }
        }

        flagged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn flag_refs(table: &mut Table) -> Vec<String> {
        EmailValidator::new()
            .validate(table, &HashSet::new())
            .iter()
            .map(|f| f.cell.to_string())
            .collect()
    }

    #[test]
    fn test_valid_addresses() {
        let v = EmailValidator::new();
        assert!(v.is_valid_email("a.b+tag@sub.example.com"));
        assert!(v.is_valid_email("user@gmail.com"));
        assert!(v.is_valid_email("User.Name@EXAMPLE.COM"));
        assert!(v.is_valid_email("\"john.doe\"@example.com"));
        assert!(v.is_valid_email("user@[192.168.1.1]"));
    }

    #[test]
    fn test_invalid_addresses() {
        let v = EmailValidator::new();
        assert!(!v.is_valid_email("plainaddress"));
        assert!(!v.is_valid_email("user@example."));
        assert!(!v.is_valid_email("user@-example.com"));
        assert!(!v.is_valid_email("user@@example.com"));
    }

    #[test]
    fn test_local_part_length_limit() {
        let v = EmailValidator::new();
        let at_limit = format!("{}@example.com", "a".repeat(64));
        let over_limit = format!("{}@example.com", "a".repeat(65));
        assert!(v.is_valid_email(&at_limit));
        assert!(!v.is_valid_email(&over_limit));
    }

    #[test]
    fn test_uncommon_domain_is_valid() {
        // Logged, never flagged
        let v = EmailValidator::new();
        assert!(v.is_valid_email("x@example.org"));
    }

    #[test]
    fn test_flags_invalid_cells() {
        let mut table = Table::from_strs(&[
            &["Name", "Email"],
            &["Ada", "ada@gmail.com"],
            &["Bad", "not-an-email"],
            &["Worse", "user@example."],
        ]);
        assert_eq!(flag_refs(&mut table), vec!["B3", "B4"]);
    }

    #[test]
    fn test_missing_column() {
        let mut table = Table::from_strs(&[&["Name", "Phone"], &["Ada", "1234567890"]]);
        assert!(flag_refs(&mut table).is_empty());
    }

    #[test]
    fn test_empty_cells_and_short_rows_skipped() {
        let mut table = Table::from_strs(&[
            &["Name", "Email"],
            &["Ada", "   "],
            &["Short"],
            &["Bad", "nope"],
        ]);
        assert_eq!(flag_refs(&mut table), vec!["B4"]);
    }

    #[test]
    fn test_empty_table() {
        assert!(flag_refs(&mut Table::new()).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let mut table = Table::from_strs(&[
            &["Email"],
            &["good@gmail.com"],
            &["bad@"],
        ]);
        let first = flag_refs(&mut table);
        let second = flag_refs(&mut table);
        assert_eq!(first, second);
    }

    #[test]
    fn test_flag_color_is_red() {
        let mut table = Table::from_strs(&[&["Email"], &["nope"]]);
        let flagged = EmailValidator::new().validate(&mut table, &HashSet::new());
        assert_eq!(flagged[0].color, HighlightColor::Red);
    }
}
