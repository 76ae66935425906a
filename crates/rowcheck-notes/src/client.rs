//! Chat-completions client for note correction

use serde::Deserialize;

use crate::config::CorrectorConfig;
use crate::corrector::TextCorrector;
use crate::error::CorrectorError;

const API_URL: &str = "https://api.openai.com/v1/chat/completions";

const SYSTEM_PROMPT: &str = "You are a call note processor. Your task is to:
1. Correct any grammar or spelling errors
2. Format the text with clear structure, including:
   - Proper line breaks between sections
   - Correct punctuation and capitalization
   - Well-organized contact information
3. Preserve all technical terms and contact details exactly as provided

Return only the processed text without any additional comments.";

/// Chat-completions API client
///
/// One blocking request per note, low temperature and bounded length for
/// short, stable output.
pub struct ChatCorrector {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl ChatCorrector {
    /// Create a new client with the given API key
    pub fn new(api_key: String, config: &CorrectorConfig) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// The model this client submits to
    pub fn model_name(&self) -> &str {
        &self.model
    }

    fn call_api(&self, text: &str) -> Result<String, CorrectorError> {
        let response = self
            .client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "model": &self.model,
                "messages": [
                    {"role": "system", "content": SYSTEM_PROMPT},
                    {"role": "user", "content": text}
                ],
                "temperature": self.temperature,
                "max_tokens": self.max_tokens
            }))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(match status.as_u16() {
                429 if body.contains("insufficient_quota") => CorrectorError::QuotaExceeded(body),
                429 => CorrectorError::RateLimited(body),
                code => CorrectorError::Api {
                    status: code,
                    message: body,
                },
            });
        }

        #[derive(Deserialize)]
        struct Message {
            content: Option<String>,
        }
        #[derive(Deserialize)]
        struct Choice {
            message: Message,
        }
        #[derive(Deserialize)]
        struct ApiResponse {
            choices: Vec<Choice>,
        }

        let api_response: ApiResponse = response
            .json()
            .map_err(|e| CorrectorError::MalformedResponse(e.to_string()))?;
        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| CorrectorError::MalformedResponse("no choices in response".into()))
    }
}

impl TextCorrector for ChatCorrector {
    fn correct(&self, text: &str) -> Result<String, CorrectorError> {
        self.call_api(text)
    }

    fn name(&self) -> &'static str {
        "chat-completions"
    }
}
