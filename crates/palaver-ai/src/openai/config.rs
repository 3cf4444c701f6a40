//! Completion client configuration.

use std::fmt;
use std::time::Duration;

use palaver_common::defaults::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TEMPERATURE,
};

/// Completion client configuration.
#[derive(Clone)]
pub struct CompletionConfig {
    pub endpoint: String,
    pub credential: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("endpoint", &self.endpoint)
            .field("credential", &"[REDACTED]")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl CompletionConfig {
    pub fn new(credential: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            credential: credential.into(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            connect_timeout: Duration::from_secs(u64::from(DEFAULT_CONNECT_TIMEOUT_SECS)),
            request_timeout: Duration::from_secs(u64::from(DEFAULT_REQUEST_TIMEOUT_SECS)),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, request: Duration) -> Self {
        self.connect_timeout = connect;
        self.request_timeout = request;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_credential() {
        let config = CompletionConfig::new("sk-very-secret");
        let printed = format!("{config:?}");
        assert!(!printed.contains("sk-very-secret"));
        assert!(printed.contains("[REDACTED]"));
    }

    #[test]
    fn defaults_match_widget_settings() {
        let config = CompletionConfig::new("k");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_tokens, 150);
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn builders_override_defaults() {
        let config = CompletionConfig::new("k")
            .with_endpoint("http://localhost:9/v1/chat/completions")
            .with_model("gpt-4o-mini")
            .with_max_tokens(64)
            .with_temperature(0.0)
            .with_timeouts(Duration::from_secs(1), Duration::from_secs(2));
        assert_eq!(config.endpoint, "http://localhost:9/v1/chat/completions");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_tokens, 64);
        assert_eq!(config.request_timeout, Duration::from_secs(2));
    }
}
