//! HTTP failure classification.
//!
//! The status code decides first: 401 and 429 are never reinterpreted.
//! For any other failure the body counts as quota exhaustion when either
//! `error.code` or `error.type` carries the marker, or failing that when
//! the raw text contains it.

use crate::{AiError, ErrorKind};

/// Marker the completion service uses for billing/quota exhaustion.
pub const QUOTA_MARKER: &str = "insufficient_quota";

const MAX_ERROR_TEXT: usize = 200;

/// Build the transport error for a non-success response.
pub fn error_from_status(status: u16, body: &str) -> AiError {
    match status {
        401 => AiError::Unauthorized,
        429 => AiError::RateLimited,
        _ => {
            let details = ErrorBody::parse(body);
            let message = details
                .message
                .clone()
                .unwrap_or_else(|| body.chars().take(MAX_ERROR_TEXT).collect());

            if details.is_quota() || body.contains(QUOTA_MARKER) {
                AiError::QuotaExceeded { status, message }
            } else {
                AiError::Api {
                    status,
                    code: details.code,
                    message,
                }
            }
        }
    }
}

/// Classify a non-success response straight from its status and body.
pub fn classify_status(status: u16, body: &str) -> ErrorKind {
    error_from_status(status, body).kind()
}

/// Fields of `{"error": {"code", "type", "message"}}`, each optional.
#[derive(Debug, Default)]
struct ErrorBody {
    code: Option<String>,
    error_type: Option<String>,
    message: Option<String>,
}

impl ErrorBody {
    fn parse(body: &str) -> Self {
        let Ok(json) = serde_json::from_str::<serde_json::Value>(body) else {
            return Self::default();
        };
        let error = &json["error"];

        Self {
            code: error["code"].as_str().map(String::from),
            error_type: error["type"].as_str().map(String::from),
            message: error["message"]
                .as_str()
                .map(|m| m.chars().take(MAX_ERROR_TEXT).collect()),
        }
    }

    fn is_quota(&self) -> bool {
        self.code.as_deref() == Some(QUOTA_MARKER) || self.error_type.as_deref() == Some(QUOTA_MARKER)
    }
}
