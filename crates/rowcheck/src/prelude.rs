//! Prelude module - common imports for rowcheck users
//!
//! ```rust
//! use rowcheck::prelude::*;
//! ```

pub use crate::{
    // Call-note stack
    CallNoteValidator,
    // Core types
    CellRef,
    ChatCorrector,
    CorrectorConfig,
    CorrectorError,
    // Error types
    Error,
    // Validators
    EmailValidator,
    FlaggedCell,
    HeaderMatcher,
    HighlightColor,
    PhoneValidator,
    RateLimiter,
    Result,
    Table,
    TextCorrector,
    // Contract
    Validator,
    // Runner
    ValidatorSet,
};
