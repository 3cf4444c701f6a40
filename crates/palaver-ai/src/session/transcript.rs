//! Session struct and bounded transcript operations.

use tracing::debug;

use crate::{AiError, Role, Turn};

/// Default turn cap, system turn included.
pub const DEFAULT_MAX_TURNS: usize = palaver_common::defaults::DEFAULT_MAX_TURNS as usize;

/// A bounded, insertion-ordered transcript.
///
/// `turns[0]` is always the system turn. After every append the length is
/// at most `max_turns`.
#[derive(Debug, Clone)]
pub struct Session {
    turns: Vec<Turn>,
    max_turns: usize,
}

impl Session {
    /// Start a session holding only the system turn. A cap of 0 is treated
    /// as 1 so the system turn always survives.
    pub fn new(system_prompt: impl Into<String>, max_turns: usize) -> Self {
        Self {
            turns: vec![Turn::system(system_prompt)],
            max_turns: max_turns.max(1),
        }
    }

    pub fn append_user(&mut self, text: impl Into<String>) -> Result<(), AiError> {
        self.append(Role::User, text.into())
    }

    pub fn append_assistant(&mut self, text: impl Into<String>) -> Result<(), AiError> {
        self.append(Role::Assistant, text.into())
    }

    fn append(&mut self, role: Role, content: String) -> Result<(), AiError> {
        if content.trim().is_empty() {
            return Err(AiError::EmptyInput);
        }
        self.turns.push(Turn { role, content });
        self.enforce_bound();
        Ok(())
    }

    /// The turns to send as the request payload, system turn first.
    pub fn snapshot_for_request(&self) -> &[Turn] {
        &self.turns
    }

    /// Keep `turns[0]` plus the most recent `max_turns - 1` turns.
    pub fn enforce_bound(&mut self) {
        if self.turns.len() <= self.max_turns {
            return;
        }
        let excess = self.turns.len() - self.max_turns;
        self.turns.drain(1..1 + excess);
        debug!(dropped = excess, kept = self.turns.len(), "Trimmed session history");
    }

    /// Drop every turn except the system turn.
    pub fn reset(&mut self) {
        self.turns.truncate(1);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn system_prompt(&self) -> &str {
        &self.turns[0].content
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True when only the system turn is present.
    pub fn is_empty(&self) -> bool {
        self.turns.len() == 1
    }
}
