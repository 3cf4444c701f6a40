//! Configuration schema types for Palaver.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod completion;
mod logging;
mod session;

pub use completion::*;
pub use logging::*;
pub use session::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Palaver.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PalaverConfig {
    pub completion: CompletionSection,
    pub session: SessionSection,
    pub logging: LoggingConfig,
}
