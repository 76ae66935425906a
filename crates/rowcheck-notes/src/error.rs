//! Error types for rowcheck-notes

use thiserror::Error;

/// Errors from the text-correction service
///
/// All variants are handled identically by the call-note validator (the
/// affected cell keeps its original text); the distinction only feeds the
/// logs.
#[derive(Debug, Error)]
pub enum CorrectorError {
    /// Transport-level failure (connection, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider-side rate limiting (HTTP 429)
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// Quota exhausted for the account
    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Any other non-success status from the service
    #[error("Service error {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, as returned
        message: String,
    },

    /// Response parsed but held no usable text
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Errors loading the service credentials file
#[derive(Debug, Error)]
pub enum CredentialsError {
    /// Credentials file missing or unreadable
    #[error("Cannot read credentials file: {0}")]
    Io(#[from] std::io::Error),

    /// Credentials file is not the expected JSON document
    #[error("Cannot parse credentials file: {0}")]
    Json(#[from] serde_json::Error),
}
