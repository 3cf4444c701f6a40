//! Default settings shared by the config schema and the client builder.

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 150;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u32 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u32 = 120;

/// Turn cap, system turn included.
pub const DEFAULT_MAX_TURNS: u32 = 20;
