//! Conversation session configuration.

use palaver_common::defaults::DEFAULT_MAX_TURNS;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful AI assistant. Keep your responses conversational and friendly.";

/// Transcript settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSection {
    /// Maximum retained turns, system turn included (valid range: 1-1000).
    pub max_turns: u32,
    pub system_prompt: String,
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
        }
    }
}
