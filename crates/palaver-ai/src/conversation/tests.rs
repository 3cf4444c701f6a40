use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::*;
use crate::session::Session;
use crate::{CompletionClient, ErrorKind, RequestOutcome, Role, Turn};

/// Replays canned outcomes and records every payload it was sent.
struct ScriptedClient {
    outcomes: Mutex<VecDeque<RequestOutcome>>,
    calls: Mutex<Vec<Vec<Turn>>>,
}

impl ScriptedClient {
    fn new(outcomes: impl IntoIterator<Item = RequestOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<Vec<Turn>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, turns: &[Turn]) -> RequestOutcome {
        self.calls.lock().unwrap().push(turns.to_vec());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(RequestOutcome::Failure(ErrorKind::Generic))
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Event {
    Message(String, bool),
    Pending,
    Resolved,
}

#[derive(Default)]
struct RecordingPresenter {
    events: Vec<Event>,
}

impl Presenter for RecordingPresenter {
    fn add_message(&mut self, text: &str, is_user: bool) {
        self.events.push(Event::Message(text.to_string(), is_user));
    }

    fn show_pending(&mut self) {
        self.events.push(Event::Pending);
    }

    fn hide_pending(&mut self) {
        self.events.push(Event::Resolved);
    }
}

fn conversation(outcomes: Vec<RequestOutcome>) -> Conversation<ScriptedClient> {
    Conversation::new(Session::new("sys", 20), ScriptedClient::new(outcomes))
}

#[tokio::test]
async fn successful_exchange_appends_reply() {
    let mut convo = conversation(vec![RequestOutcome::Success("hello".into())]);
    let mut presenter = RecordingPresenter::default();

    let result = convo.submit("hi", &mut presenter).await.unwrap();
    assert_eq!(
        result,
        Submission::Completed(RequestOutcome::Success("hello".into()))
    );

    assert_eq!(
        convo.session().turns(),
        &[Turn::system("sys"), Turn::user("hi"), Turn::assistant("hello")]
    );
    assert_eq!(convo.session().len(), 3);
    assert_eq!(
        presenter.events,
        vec![
            Event::Message("hi".into(), true),
            Event::Pending,
            Event::Resolved,
            Event::Message("hello".into(), false),
        ]
    );
    assert_eq!(convo.phase(), Phase::Idle);
}

#[tokio::test]
async fn request_carries_user_turn() {
    let mut convo = conversation(vec![RequestOutcome::Success("ok".into())]);
    let mut presenter = RecordingPresenter::default();
    convo.submit("  what time is it?  ", &mut presenter).await.unwrap();

    let calls = convo.client().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        vec![Turn::system("sys"), Turn::user("what time is it?")]
    );
}

#[tokio::test]
async fn failure_keeps_user_turn_and_shows_message() {
    let mut convo = conversation(vec![RequestOutcome::Failure(ErrorKind::RateLimited)]);
    let mut presenter = RecordingPresenter::default();

    let result = convo.submit("hi", &mut presenter).await.unwrap();
    assert_eq!(
        result,
        Submission::Completed(RequestOutcome::Failure(ErrorKind::RateLimited))
    );
    assert_eq!(convo.session().turns(), &[Turn::system("sys"), Turn::user("hi")]);
    assert_eq!(
        presenter.events.last(),
        Some(&Event::Message(
            ErrorKind::RateLimited.user_message().into(),
            false
        ))
    );
    assert_eq!(convo.phase(), Phase::Idle);
}

#[tokio::test]
async fn can_submit_again_after_failure() {
    let mut convo = conversation(vec![
        RequestOutcome::Failure(ErrorKind::Generic),
        RequestOutcome::Success("second time lucky".into()),
    ]);
    let mut presenter = RecordingPresenter::default();

    convo.submit("first", &mut presenter).await.unwrap();
    convo.submit("again", &mut presenter).await.unwrap();

    let roles: Vec<Role> = convo.session().turns().iter().map(|t| t.role).collect();
    assert_eq!(roles, vec![Role::System, Role::User, Role::User, Role::Assistant]);
    assert_eq!(convo.client().calls()[1].len(), 3);
}

#[tokio::test]
async fn blank_input_is_ignored() {
    let mut convo = conversation(vec![]);
    let mut presenter = RecordingPresenter::default();

    for raw in ["", "   ", "\n\t "] {
        let result = convo.submit(raw, &mut presenter).await.unwrap();
        assert_eq!(result, Submission::Ignored);
    }
    assert!(convo.client().calls().is_empty());
    assert!(presenter.events.is_empty());
    assert_eq!(convo.session().len(), 1);
}

#[tokio::test]
async fn outbound_payload_stays_bounded() {
    let outcomes = (0..30).map(|i| RequestOutcome::Success(format!("r{i}")));
    let mut convo = Conversation::new(Session::new("sys", 5), ScriptedClient::new(outcomes));
    let mut presenter = RecordingPresenter::default();

    for i in 0..30 {
        convo.submit(&format!("q{i}"), &mut presenter).await.unwrap();
    }

    for payload in convo.client().calls() {
        assert!(payload.len() <= 5);
        assert_eq!(payload[0], Turn::system("sys"));
    }
    let last = convo.session().turns();
    assert_eq!(last.len(), 5);
    assert_eq!(last[4], Turn::assistant("r29"));
}

#[tokio::test]
async fn reset_clears_history() {
    let mut convo = conversation(vec![RequestOutcome::Success("hello".into())]);
    let mut presenter = RecordingPresenter::default();
    convo.submit("hi", &mut presenter).await.unwrap();

    convo.reset();
    assert_eq!(convo.session().turns(), &[Turn::system("sys")]);
}

#[tokio::test]
async fn blank_success_is_reported_as_generic_failure() {
    let mut convo = conversation(vec![
        RequestOutcome::Success("  ".into()),
        RequestOutcome::Success("recovered".into()),
    ]);
    let mut presenter = RecordingPresenter::default();

    let result = convo.submit("hi", &mut presenter).await.unwrap();
    assert_eq!(
        result,
        Submission::Completed(RequestOutcome::Failure(ErrorKind::Generic))
    );
    assert_eq!(convo.session().turns(), &[Turn::system("sys"), Turn::user("hi")]);
    assert_eq!(
        presenter.events.last(),
        Some(&Event::Message(ErrorKind::Generic.user_message().into(), false))
    );

    convo.submit("again", &mut presenter).await.unwrap();
    assert_eq!(convo.session().turns().last(), Some(&Turn::assistant("recovered")));
}
