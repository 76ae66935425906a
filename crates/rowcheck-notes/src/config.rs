//! Corrector configuration and credentials loading

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::CredentialsError;

/// Default location of the credentials file
pub const DEFAULT_CREDENTIALS_PATH: &str = "config/credentials.json";

/// Options for the call-note corrector
#[derive(Debug, Clone)]
pub struct CorrectorConfig {
    /// Model used for correction (default: gpt-3.5-turbo)
    pub model: String,
    /// Sampling temperature; kept low for near-deterministic output
    pub temperature: f32,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
    /// Path to the JSON credentials file
    pub credentials_path: PathBuf,
    /// Minimum wall-clock interval between service calls
    pub min_call_interval: Duration,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.3,
            max_tokens: 500,
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_PATH),
            min_call_interval: Duration::from_secs(1),
        }
    }
}

/// Shape of the credentials document
#[derive(Debug, Deserialize)]
struct Credentials {
    openai_api_key: String,
}

/// Load the service API key from a JSON credentials file
pub fn load_api_key(path: &Path) -> Result<String, CredentialsError> {
    let file = File::open(path)?;
    let credentials: Credentials = serde_json::from_reader(file)?;
    Ok(credentials.openai_api_key)
}
