//! CompletionClient trait implementation for OpenAiClient.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, warn};

use crate::{AiError, CompletionClient, RequestOutcome, Turn};

use super::classify::error_from_status;
use super::client::{parse_reply, OpenAiClient};

impl OpenAiClient {
    /// One POST, no retry. Errors are still unclassified here.
    async fn send(&self, turns: &[Turn]) -> Result<String, AiError> {
        let body = self.build_request_body(turns);

        debug!(
            model = %self.config.model,
            turns = turns.len(),
            "Completion API request"
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .header(AUTHORIZATION, self.auth.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(error_from_status(status.as_u16(), &text));
        }

        let text = response.text().await.map_err(transport_error)?;
        let json: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| AiError::Parse(e.to_string()))?;

        parse_reply(&json)
    }
}

fn transport_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::Network(e.to_string())
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, turns: &[Turn]) -> RequestOutcome {
        match self.send(turns).await {
            Ok(reply) => {
                debug!(len = reply.len(), "Completion succeeded");
                RequestOutcome::Success(reply)
            }
            Err(e) => {
                let kind = e.kind();
                warn!(error = %e, kind = %kind, "Completion failed");
                RequestOutcome::Failure(kind)
            }
        }
    }
}
