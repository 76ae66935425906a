//! # rowcheck-notes
//!
//! Call note correction backed by an external text-correction service.
//!
//! [`CallNoteValidator`] scans the call-note column, submits each non-empty
//! note to a [`TextCorrector`], and rewrites cells whose corrected text
//! differs, flagging them yellow. Calls are throttled by [`RateLimiter`];
//! any service failure leaves the affected row untouched.
//!
//! The production corrector is [`ChatCorrector`], an OpenAI chat-completions
//! client whose API key is read from a JSON credentials file (see
//! [`CorrectorConfig`]). Without usable credentials the validator degrades
//! to a pass-through.

mod client;
mod config;
mod corrector;
mod error;
mod rate_limit;
mod validator;

pub use client::ChatCorrector;
pub use config::{load_api_key, CorrectorConfig, DEFAULT_CREDENTIALS_PATH};
pub use corrector::TextCorrector;
pub use error::{CorrectorError, CredentialsError};
pub use rate_limit::RateLimiter;
pub use validator::CallNoteValidator;
