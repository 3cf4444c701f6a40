//! Session validation (turn cap, system prompt).

use crate::schema::PalaverConfig;

use super::helpers::{validate_non_empty, validate_range};

pub(crate) fn validate_session(errors: &mut Vec<String>, config: &PalaverConfig) {
    validate_range(errors, "session.max_turns", config.session.max_turns, 1, 1000);
    validate_non_empty(errors, "session.system_prompt", &config.session.system_prompt);
}
