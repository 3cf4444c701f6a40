//! Chat-completions client (OpenAI wire format).
//!
//! Implements the `CompletionClient` trait against any endpoint speaking
//! `POST {model, messages, max_tokens, temperature}` and answering with
//! `choices[0].message.content`.

mod api;
pub mod classify;
mod client;
mod config;

pub use client::OpenAiClient;
pub use config::CompletionConfig;
