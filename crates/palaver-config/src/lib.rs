//! Palaver configuration system.
//!
//! TOML-based configuration for the completion endpoint, the session
//! transcript bound, and logging. Every section uses serde defaults so a
//! partial file (or no file at all) works out of the box. The API
//! credential is resolved separately from the environment first, see
//! [`credentials`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use palaver_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod credentials;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use credentials::resolve_api_key;
pub use schema::PalaverConfig;

use std::path::Path;

use palaver_common::ConfigError;

/// Load and validate the configuration.
///
/// With `path`, that file must exist. Without it, `config.toml` is read from
/// the OS config directory and a commented default is created if missing.
pub fn load_config(path: Option<&Path>) -> Result<PalaverConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
///
/// The file-level `api_key` is blanked so the output is safe to log.
pub fn config_to_json(config: &PalaverConfig) -> String {
    let mut redacted = config.clone();
    if redacted.completion.api_key.is_some() {
        redacted.completion.api_key = Some("[REDACTED]".into());
    }
    serde_json::to_string_pretty(&redacted)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = PalaverConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"completion\""));
        assert!(json.contains("\"session\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_to_json_redacts_api_key() {
        let mut config = PalaverConfig::default();
        config.completion.api_key = Some("sk-secret".into());
        let json = config_to_json(&config);
        assert!(!json.contains("sk-secret"));
        assert!(json.contains("[REDACTED]"));
    }

    #[test]
    fn load_config_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[session]\nmax_turns = 0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("session.max_turns"));
    }

    #[test]
    fn load_config_with_explicit_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
