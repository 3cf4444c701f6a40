use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("missing credential: {0}")]
    MissingCredential(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PalaverError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("ai error: {0}")]
    Ai(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("completion.max_tokens = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: completion.max_tokens = 0"
        );

        let err = ConfigError::MissingCredential("set OPENAI_API_KEY".into());
        assert_eq!(err.to_string(), "missing credential: set OPENAI_API_KEY");
    }

    #[test]
    fn palaver_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: PalaverError = config_err.into();
        assert!(matches!(err, PalaverError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn palaver_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let err: PalaverError = io_err.into();
        assert!(matches!(err, PalaverError::Io(_)));
        assert!(err.to_string().contains("stdout closed"));
    }

    #[test]
    fn palaver_error_ai_display() {
        let err = PalaverError::Ai("client build failed".into());
        assert_eq!(err.to_string(), "ai error: client build failed");
    }
}
