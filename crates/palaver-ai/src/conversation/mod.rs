//! The submit/reply interaction cycle.
//!
//! `Conversation` composes a `Session` and a `CompletionClient`:
//!
//! ```text
//! Idle --submit(non-empty)--> Sending --Success--> Idle  (assistant turn appended)
//!                                     --Failure--> Idle  (user turn kept, error shown)
//! ```
//!
//! Rendering is delegated to a `Presenter`.

mod cycle;
mod guard;
mod presenter;

#[cfg(test)]
mod tests;

pub use cycle::{Conversation, Phase, Submission};
pub use presenter::Presenter;
