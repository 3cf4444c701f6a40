//! API credential resolution.
//!
//! Resolution order:
//! 1. `PALAVER_API_KEY` env var
//! 2. `OPENAI_API_KEY` env var
//! 3. `completion.api_key` from the config file

use palaver_common::ConfigError;

use crate::schema::PalaverConfig;

pub const ENV_VARS: &[&str] = &["PALAVER_API_KEY", "OPENAI_API_KEY"];

/// Resolve the bearer credential from the process environment and config.
pub fn resolve_api_key(config: &PalaverConfig) -> Result<String, ConfigError> {
    resolve_api_key_with(config, |name| std::env::var(name).ok())
}

/// Resolve the credential with an injectable variable lookup.
pub fn resolve_api_key_with(
    config: &PalaverConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, ConfigError> {
    for &name in ENV_VARS {
        if let Some(value) = lookup(name) {
            let value = value.trim();
            if !value.is_empty() {
                tracing::debug!(source = name, "Using API key from environment");
                return Ok(value.to_string());
            }
        }
    }

    if let Some(key) = config.completion.api_key.as_deref().map(str::trim) {
        if !key.is_empty() {
            tracing::debug!("Using API key from config file");
            return Ok(key.to_string());
        }
    }

    Err(ConfigError::MissingCredential(
        "set PALAVER_API_KEY or OPENAI_API_KEY, or completion.api_key in config.toml".into(),
    ))
}
