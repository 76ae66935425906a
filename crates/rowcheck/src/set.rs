//! Running a set of validators over one table

use std::collections::HashSet;

use rowcheck_core::{FlaggedCell, Table, Validator};
use rowcheck_notes::CallNoteValidator;
use rowcheck_validators::{EmailValidator, PhoneValidator};

/// An ordered set of validators run over a single table
///
/// Flagged cells are concatenated in validator order; each validator is an
/// independent pass and none depends on another's output.
pub struct ValidatorSet {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidatorSet {
    /// Create a set from explicit validators
    pub fn new(validators: Vec<Box<dyn Validator>>) -> Self {
        Self { validators }
    }

    /// The standard set: email, phone, call notes
    ///
    /// The call-note validator is built from the default configuration; if
    /// its credentials are unavailable it runs as a pass-through.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(EmailValidator::new()),
            Box::new(PhoneValidator::new()),
            Box::new(CallNoteValidator::new()),
        ])
    }

    /// Number of validators in the set
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Whether the set holds no validators
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Run every validator in order and collect all flagged cells
    pub fn run(&mut self, table: &mut Table, valid_pins: &HashSet<String>) -> Vec<FlaggedCell> {
        let mut flagged = Vec::new();
        for validator in &mut self.validators {
            flagged.extend(validator.validate(table, valid_pins));
        }
        flagged
    }
}
