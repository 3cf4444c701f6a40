//! Completion client struct, request building, and response parsing.

use reqwest::header::HeaderValue;

use crate::{AiError, Turn};

use super::config::CompletionConfig;

/// Chat-completions API client.
pub struct OpenAiClient {
    pub(crate) config: CompletionConfig,
    pub(crate) auth: HeaderValue,
    pub(crate) http: reqwest::Client,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    pub fn new(config: CompletionConfig) -> Result<Self, AiError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.credential))
            .map_err(|_| AiError::Config("credential is not a valid header value".into()))?;
        auth.set_sensitive(true);

        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AiError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, auth, http })
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// Build the JSON request body.
    pub(crate) fn build_request_body(&self, turns: &[Turn]) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "messages": turns,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
        })
    }
}

/// Extract the trimmed reply from a success body.
pub(crate) fn parse_reply(json: &serde_json::Value) -> Result<String, AiError> {
    let choices = json["choices"]
        .as_array()
        .ok_or_else(|| AiError::Parse("no choices in response".to_string()))?;

    let first = choices
        .first()
        .ok_or_else(|| AiError::Parse("empty choices".to_string()))?;

    let content = first["message"]["content"]
        .as_str()
        .ok_or_else(|| AiError::Parse("missing message content".to_string()))?
        .trim();

    if content.is_empty() {
        return Err(AiError::EmptyReply);
    }
    Ok(content.to_string())
}
