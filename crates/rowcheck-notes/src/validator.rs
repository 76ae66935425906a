//! Call note correction pass

use std::collections::HashSet;
use std::time::Duration;

use rowcheck_core::{CellRef, FlaggedCell, HeaderMatcher, HighlightColor, Table, Validator};

use crate::client::ChatCorrector;
use crate::config::{load_api_key, CorrectorConfig};
use crate::corrector::TextCorrector;
use crate::rate_limit::RateLimiter;

const NOTE_HEADERS: &[&str] = &["call note", "call notes", "callnotes"];

/// Outcome of processing one note cell
#[derive(Debug, PartialEq, Eq)]
enum NoteOutcome {
    /// Cell was empty; nothing was sent
    Skipped,
    /// Service returned identical text
    Unchanged,
    /// Service returned different text; the cell is rewritten
    Modified(String),
    /// Service call failed; the original text is kept
    Failed,
}

/// Corrects and reformats call notes via the text-correction service
///
/// Modified cells are rewritten in place and flagged yellow ("changed",
/// as opposed to the format validators' red "invalid"). Failed service
/// calls and unreachable credentials leave rows untouched and unflagged:
/// the pass degrades, it never aborts.
pub struct CallNoteValidator {
    matcher: HeaderMatcher,
    corrector: Option<Box<dyn TextCorrector>>,
    limiter: RateLimiter,
}

impl CallNoteValidator {
    /// Create a validator from the default configuration
    ///
    /// Reads the API key from the configured credentials file. If the file
    /// is missing or unreadable the validator still works, as a pass-through
    /// that flags nothing.
    pub fn new() -> Self {
        Self::from_config(&CorrectorConfig::default())
    }

    /// Create a validator from an explicit configuration
    pub fn from_config(config: &CorrectorConfig) -> Self {
        let corrector: Option<Box<dyn TextCorrector>> =
            match load_api_key(&config.credentials_path) {
                Ok(api_key) => Some(Box::new(ChatCorrector::new(api_key, config))),
                Err(e) => {
                    tracing::error!("API key load failed: {e}");
                    None
                }
            };
        Self {
            matcher: HeaderMatcher::new("call note", NOTE_HEADERS),
            corrector,
            limiter: RateLimiter::new(config.min_call_interval),
        }
    }

    /// Create a validator around a specific corrector implementation
    pub fn with_corrector(
        corrector: Box<dyn TextCorrector>,
        min_call_interval: Duration,
    ) -> Self {
        Self {
            matcher: HeaderMatcher::new("call note", NOTE_HEADERS),
            corrector: Some(corrector),
            limiter: RateLimiter::new(min_call_interval),
        }
    }

    /// Process one note: throttle, call the service, classify the outcome
    fn process_note(&mut self, text: &str) -> NoteOutcome {
        if text.is_empty() {
            return NoteOutcome::Skipped;
        }

        let Self {
            corrector, limiter, ..
        } = self;
        let Some(corrector) = corrector else {
            return NoteOutcome::Unchanged;
        };

        // Throttling is mandatory ordering: it runs before every service
        // call, including the first, where it is a no-op.
        limiter.throttle();

        match corrector.correct(text) {
            Ok(corrected) => {
                let corrected = corrected.trim();
                if corrected != text {
                    NoteOutcome::Modified(corrected.to_string())
                } else {
                    NoteOutcome::Unchanged
                }
            }
            Err(e) => {
                tracing::error!("{} error: {e}", corrector.name());
                NoteOutcome::Failed
            }
        }
    }
}

impl Default for CallNoteValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for CallNoteValidator {
    fn name(&self) -> &'static str {
        "call note"
    }

    fn highlight_color(&self) -> HighlightColor {
        HighlightColor::Yellow
    }

    fn validate(&mut self, table: &mut Table, _valid_pins: &HashSet<String>) -> Vec<FlaggedCell> {
        let mut modified = Vec::new();
        if table.is_empty() {
            return modified;
        }

        let Some(col_idx) = self.matcher.resolve(table) else {
            tracing::warn!("Call Notes column not found");
            return modified;
        };

        for row_idx in 1..table.row_count() {
            let Some(original) = table.cell(row_idx, col_idx) else {
                continue;
            };
            let original = original.trim().to_string();

            match self.process_note(&original) {
                NoteOutcome::Modified(corrected) => {
                    // A failed write is this row's problem only
                    if let Err(e) = table.set_cell(row_idx, col_idx, corrected) {
                        tracing::error!("Row {row_idx} error: {e}");
                        continue;
                    }
                    let cell = CellRef::new(row_idx, col_idx);
                    modified.push(FlaggedCell::new(cell, HighlightColor::Yellow));
                }
                NoteOutcome::Skipped | NoteOutcome::Unchanged | NoteOutcome::Failed => {}
            }
        }

        modified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CorrectorError;
    use pretty_assertions::assert_eq;

    /// Returns input unchanged
    struct Identity;

    impl TextCorrector for Identity {
        fn correct(&self, text: &str) -> Result<String, CorrectorError> {
            Ok(text.to_string())
        }
    }

    /// Uppercases input
    struct Shouty;

    impl TextCorrector for Shouty {
        fn correct(&self, text: &str) -> Result<String, CorrectorError> {
            Ok(text.to_uppercase())
        }
    }

    /// Pads input with whitespace the validator should trim away
    struct Padded;

    impl TextCorrector for Padded {
        fn correct(&self, text: &str) -> Result<String, CorrectorError> {
            Ok(format!("  {text}\n\n"))
        }
    }

    /// Always fails with a quota error
    struct OutOfQuota;

    impl TextCorrector for OutOfQuota {
        fn correct(&self, _text: &str) -> Result<String, CorrectorError> {
            Err(CorrectorError::QuotaExceeded("insufficient_quota".into()))
        }
    }

    /// Fails on notes containing "fail", uppercases the rest
    struct Flaky;

    impl TextCorrector for Flaky {
        fn correct(&self, text: &str) -> Result<String, CorrectorError> {
            if text.contains("fail") {
                Err(CorrectorError::RateLimited("too many requests".into()))
            } else {
                Ok(text.to_uppercase())
            }
        }
    }

    fn validator(corrector: Box<dyn TextCorrector>) -> CallNoteValidator {
        CallNoteValidator::with_corrector(corrector, Duration::ZERO)
    }

    fn notes_table() -> Table {
        Table::from_strs(&[
            &["Name", "Call Notes"],
            &["Ada", "spoke with client"],
            &["Grace", ""],
            &["Linus", "left voicemail"],
        ])
    }

    #[test]
    fn test_identity_corrector_changes_nothing() {
        let mut table = notes_table();
        let before = table.clone();
        let flagged = validator(Box::new(Identity)).validate(&mut table, &HashSet::new());
        assert!(flagged.is_empty());
        assert_eq!(table, before);
    }

    #[test]
    fn test_modified_cells_are_rewritten_and_flagged_yellow() {
        let mut table = notes_table();
        let flagged = validator(Box::new(Shouty)).validate(&mut table, &HashSet::new());

        let refs: Vec<String> = flagged.iter().map(|f| f.cell.to_string()).collect();
        assert_eq!(refs, vec!["B2", "B4"]);
        assert!(flagged.iter().all(|f| f.color == HighlightColor::Yellow));
        assert_eq!(table.cell(1, 1), Some("SPOKE WITH CLIENT"));
        assert_eq!(table.cell(2, 1), Some(""));
        assert_eq!(table.cell(3, 1), Some("LEFT VOICEMAIL"));
    }

    #[test]
    fn test_whitespace_only_difference_is_unchanged() {
        let mut table = notes_table();
        let before = table.clone();
        let flagged = validator(Box::new(Padded)).validate(&mut table, &HashSet::new());
        assert!(flagged.is_empty());
        assert_eq!(table, before);
    }

    #[test]
    fn test_service_failure_keeps_rows_and_flags_nothing() {
        let mut table = notes_table();
        let before = table.clone();
        let flagged = validator(Box::new(OutOfQuota)).validate(&mut table, &HashSet::new());
        assert!(flagged.is_empty());
        assert_eq!(table, before);
    }

    #[test]
    fn test_one_failing_row_does_not_stop_the_pass() {
        let mut table = Table::from_strs(&[
            &["Call Note"],
            &["this one will fail"],
            &["this one works"],
        ]);
        let flagged = validator(Box::new(Flaky)).validate(&mut table, &HashSet::new());

        let refs: Vec<String> = flagged.iter().map(|f| f.cell.to_string()).collect();
        assert_eq!(refs, vec!["A3"]);
        assert_eq!(table.cell(1, 0), Some("this one will fail"));
        assert_eq!(table.cell(2, 0), Some("THIS ONE WORKS"));
    }

    #[test]
    fn test_missing_credentials_degrade_to_pass_through() {
        let config = CorrectorConfig {
            credentials_path: "no/such/credentials.json".into(),
            ..CorrectorConfig::default()
        };
        let mut v = CallNoteValidator::from_config(&config);

        let mut table = notes_table();
        let before = table.clone();
        let flagged = v.validate(&mut table, &HashSet::new());
        assert!(flagged.is_empty());
        assert_eq!(table, before);
    }

    #[test]
    fn test_missing_column() {
        let mut table = Table::from_strs(&[&["Name"], &["Ada"]]);
        let flagged = validator(Box::new(Shouty)).validate(&mut table, &HashSet::new());
        assert!(flagged.is_empty());
    }

    #[test]
    fn test_short_rows_skipped() {
        let mut table = Table::from_strs(&[
            &["Name", "Call Note"],
            &["only-name"],
            &["Ada", "note here"],
        ]);
        let flagged = validator(Box::new(Shouty)).validate(&mut table, &HashSet::new());
        let refs: Vec<String> = flagged.iter().map(|f| f.cell.to_string()).collect();
        assert_eq!(refs, vec!["B3"]);
    }

    #[test]
    fn test_empty_table() {
        let flagged = validator(Box::new(Shouty)).validate(&mut Table::new(), &HashSet::new());
        assert!(flagged.is_empty());
    }

    #[test]
    fn test_process_note_outcomes() {
        let mut v = validator(Box::new(Shouty));
        assert_eq!(v.process_note(""), NoteOutcome::Skipped);
        assert_eq!(v.process_note("HI"), NoteOutcome::Unchanged);
        assert_eq!(
            v.process_note("hi"),
            NoteOutcome::Modified("HI".to_string())
        );

        let mut failing = validator(Box::new(OutOfQuota));
        assert_eq!(failing.process_note("hi"), NoteOutcome::Failed);
    }
}
