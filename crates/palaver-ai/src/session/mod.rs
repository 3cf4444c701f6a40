//! Conversation transcript management.
//!
//! A `Session` holds the ordered turns of one conversation, always led by
//! the system turn, and keeps them under a fixed cap by dropping the oldest
//! non-system turns.

mod transcript;


pub use transcript::{Session, DEFAULT_MAX_TURNS};
