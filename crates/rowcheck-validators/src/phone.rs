//! Phone number format validation

use std::collections::HashSet;

use regex::Regex;
use rowcheck_core::{CellRef, FlaggedCell, HeaderMatcher, HighlightColor, Table, Validator};

/// Accepted formats:
/// +91 1234567890
/// (+91) 1234567890
/// +91-123-456-7890
/// 1234567890
/// 123-456-7890
/// (123) 456-7890
const PHONE_PATTERNS: &[&str] = &[
    r"^\+?91[-\s]?\d{10}$",
    r"^\(\+?91\)[-\s]?\d{10}$",
    r"^\+?91[-\s]?\d{3}[-\s]?\d{3}[-\s]?\d{4}$",
    r"^\d{10}$",
    r"^\d{3}[-\s]?\d{3}[-\s]?\d{4}$",
    r"^\(\d{3}\)[-\s]?\d{3}[-\s]?\d{4}$",
];

const PHONE_HEADERS: &[&str] = &["phone", "phone number", "contact", "mobile", "cell"];

/// Validates phone numbers in various formats
///
/// Raw values are cleaned before matching: values carrying a "+91" country
/// code are kept as written, everything else is stripped down to digits and
/// the separators `+`, `(`, `)`, `-`. A cleaned value must fully match one
/// of the accepted patterns; anything else is flagged red.
pub struct PhoneValidator {
    matcher: HeaderMatcher,
    patterns: Vec<Regex>,
    strip: Regex,
}

impl PhoneValidator {
    /// Create a new phone validator
    pub fn new() -> Self {
        Self {
            matcher: HeaderMatcher::new("phone", PHONE_HEADERS),
            patterns: PHONE_PATTERNS
                .iter()
                .map(|p| Regex::new(p).expect("phone pattern is valid"))
                .collect(),
            strip: Regex::new(r"[^\d+()-]").expect("strip pattern is valid"),
        }
    }

    /// Clean a raw value, preserving intentional country-code formatting
    fn clean_phone(&self, phone: &str) -> String {
        let phone = phone.trim();
        // Keep the structure of (+91) and +91 numbers intact
        if phone.contains("(+91)") || phone.contains("+91") {
            return phone.to_string();
        }
        self.strip.replace_all(phone, "").into_owned()
    }

    /// Check whether a cleaned value matches any accepted pattern
    fn is_valid_phone(&self, phone: &str) -> bool {
        if phone.is_empty() {
            return false;
        }
        for pattern in &self.patterns {
            if pattern.is_match(phone) {
                tracing::debug!("Phone {phone} matched pattern {}", pattern.as_str());
                return true;
            }
        }
        tracing::debug!("Phone {phone} did not match any patterns");
        false
    }
}

impl Default for PhoneValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for PhoneValidator {
    fn name(&self) -> &'static str {
        "phone"
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
            tracing::warn!("Phone number column not found");
            return flagged;
        };

        for (row_idx, row) in table.data_rows() {
            let Some(phone) = row.get(col_idx) else {
                continue;
            };

            let phone = phone.trim();
            if phone.is_empty() {
                continue;
            }

            let cleaned = self.clean_phone(phone);
            if !self.is_valid_phone(&cleaned) {
                let cell = CellRef::new(row_idx, col_idx);
                tracing::info!("Invalid phone number found in {cell}: {phone}");
                flagged.push(FlaggedCell::new(cell, HighlightColor::Red));
            }
        }

        flagged
    }
}
