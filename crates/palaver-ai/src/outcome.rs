//! Result of one completion exchange, as seen by the caller.

use crate::AiError;

/// User-facing failure taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad or missing credential.
    Unauthorized,
    /// Too many requests.
    RateLimited,
    /// Account or billing limit reached.
    QuotaExceeded,
    /// Network failure, malformed response, or unknown status.
    Generic,
}

impl ErrorKind {
    /// The fixed message shown to the user for this kind.
    pub fn user_message(self) -> &'static str {
        match self {
            ErrorKind::Unauthorized => "API key error. Please check your API key.",
            ErrorKind::RateLimited => {
                "Rate limit exceeded. Please wait a moment before trying again."
            }
            ErrorKind::QuotaExceeded => "API quota exceeded. Please check your account.",
            ErrorKind::Generic => "Sorry, I encountered an error. Please try again.",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::RateLimited => "rate_limited",
            ErrorKind::QuotaExceeded => "quota_exceeded",
            ErrorKind::Generic => "generic",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Trimmed, non-empty reply text.
    Success(String),
    Failure(ErrorKind),
}

impl RequestOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success(_))
    }

    pub fn reply(&self) -> Option<&str> {
        match self {
            RequestOutcome::Success(text) => Some(text),
            RequestOutcome::Failure(_) => None,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            RequestOutcome::Success(_) => None,
            RequestOutcome::Failure(kind) => Some(*kind),
        }
    }
}

impl From<Result<String, AiError>> for RequestOutcome {
    fn from(result: Result<String, AiError>) -> Self {
        match result {
            Ok(text) => RequestOutcome::Success(text),
            Err(e) => RequestOutcome::Failure(e.kind()),
        }
    }
}
