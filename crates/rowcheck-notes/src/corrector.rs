//! The text-correction seam

use crate::error::CorrectorError;

/// A text-correction service: submit text, get corrected text or a failure
///
/// The call-note validator only depends on this trait, so the throttling and
/// per-row error handling can be exercised with substitute implementations.
pub trait TextCorrector {
    /// Correct and reformat one note
    fn correct(&self, text: &str) -> Result<String, CorrectorError>;

    /// Identifier for log messages
    fn name(&self) -> &'static str {
        "corrector"
    }
}
