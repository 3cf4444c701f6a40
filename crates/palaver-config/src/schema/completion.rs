//! Completion endpoint configuration.

use palaver_common::defaults::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TEMPERATURE,
};
use serde::{Deserialize, Serialize};

/// Remote completion endpoint settings.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionSection {
    pub endpoint: String,
    pub model: String,
    /// Valid range: 1-32768.
    pub max_tokens: u32,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    pub connect_timeout_secs: u32,
    pub request_timeout_secs: u32,
    /// Fallback credential. Environment variables take precedence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl std::fmt::Debug for CompletionSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionSection")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for CompletionSection {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            model: DEFAULT_MODEL.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            api_key: None,
        }
    }
}
