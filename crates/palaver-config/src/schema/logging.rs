//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing_subscriber` filter directive scoped to the palaver crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "palaver=debug",
            LogLevel::Info => "palaver=info",
            LogLevel::Warning => "palaver=warn",
            LogLevel::Error => "palaver=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
