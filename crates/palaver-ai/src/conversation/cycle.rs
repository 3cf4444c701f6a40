//! Conversation struct and the async submit cycle.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use crate::session::Session;
use crate::{AiError, CompletionClient, ErrorKind, RequestOutcome};

use super::guard::BusyGuard;
use super::presenter::Presenter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Sending,
}

/// What a call to [`Conversation::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank input: no turn was added and nothing was sent.
    Ignored,
    /// One exchange ran to completion.
    Completed(RequestOutcome),
}

/// One conversation: a transcript plus the client it is exchanged with.
pub struct Conversation<C> {
    session: Session,
    client: C,
    busy: AtomicBool,
}

impl<C: CompletionClient> Conversation<C> {
    pub fn new(session: Session, client: C) -> Self {
        Self {
            session,
            client,
            busy: AtomicBool::new(false),
        }
    }

    /// Run one interaction cycle for raw user input.
    ///
    /// Completion failures are not errors: they come back as
    /// `Submission::Completed(RequestOutcome::Failure(_))`. A blank
    /// `Success` from the client is reported as `Failure(Generic)`.
    ///
    /// `&mut self` already rules out overlapping calls on one conversation;
    /// the busy flag only backs `phase()` for callers sharing it behind a lock.
    pub async fn submit(
        &mut self,
        raw: &str,
        presenter: &mut dyn Presenter,
    ) -> Result<Submission, AiError> {
        let text = raw.trim();
        if text.is_empty() {
            return Ok(Submission::Ignored);
        }

        let _guard = BusyGuard::acquire(&self.busy)?;

        presenter.add_message(text, true);
        self.session.append_user(text)?;

        presenter.show_pending();
        let outcome = self
            .client
            .complete(self.session.snapshot_for_request())
            .await;
        presenter.hide_pending();

        let outcome = match outcome {
            RequestOutcome::Success(reply) if reply.trim().is_empty() => {
                warn!("Client returned a blank reply");
                RequestOutcome::Failure(ErrorKind::Generic)
            }
            other => other,
        };

        match &outcome {
            RequestOutcome::Success(reply) => {
                self.session.append_assistant(reply.as_str())?;
                presenter.add_message(reply, false);
                debug!(turns = self.session.len(), "Exchange complete");
            }
            RequestOutcome::Failure(kind) => {
                warn!(kind = %kind, "Exchange failed, transcript keeps the user turn");
                presenter.add_message(kind.user_message(), false);
            }
        }

        Ok(Submission::Completed(outcome))
    }

    pub fn phase(&self) -> Phase {
        if self.busy.load(Ordering::Acquire) {
            Phase::Sending
        } else {
            Phase::Idle
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Forget the exchange history, keeping the system turn.
    pub fn reset(&mut self) {
        self.session.reset();
    }
}
