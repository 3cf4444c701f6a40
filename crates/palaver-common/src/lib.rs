//! Shared error types and defaults for the palaver workspace.

pub mod defaults;
pub mod errors;

pub use errors::{ConfigError, PalaverError};
