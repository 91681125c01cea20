use super::*;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Once;

use async_trait::async_trait;
use futures::executor::block_on;

use crate::net::types::{Activity, ActivityCollection, MessageResponse};

// =============================================================
// Fakes
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq)]
enum Call {
    Fetch,
    Signup(String, String),
    Unregister(String, String),
}

#[derive(Default)]
struct FakeApi {
    calls: RefCell<Vec<Call>>,
    fetches: RefCell<VecDeque<Result<ActivityCollection, ApiError>>>,
    signup: RefCell<Option<Result<MessageResponse, ApiError>>>,
    unregister: RefCell<Option<Result<MessageResponse, ApiError>>>,
}

impl FakeApi {
    fn with_fetch(self, result: Result<ActivityCollection, ApiError>) -> Self {
        self.fetches.borrow_mut().push_back(result);
        self
    }

    fn with_signup(self, result: Result<MessageResponse, ApiError>) -> Self {
        *self.signup.borrow_mut() = Some(result);
        self
    }

    fn with_unregister(self, result: Result<MessageResponse, ApiError>) -> Self {
        *self.unregister.borrow_mut() = Some(result);
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn fetch_count(&self) -> usize {
        self.calls.borrow().iter().filter(|c| **c == Call::Fetch).count()
    }
}

fn not_configured() -> ApiError {
    ApiError::Transport("fake not configured".to_owned())
}

#[async_trait(?Send)]
impl ActivityApi for FakeApi {
    async fn fetch_activities(&self) -> Result<ActivityCollection, ApiError> {
        self.calls.borrow_mut().push(Call::Fetch);
        self.fetches.borrow_mut().pop_front().unwrap_or_else(|| Err(not_configured()))
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<MessageResponse, ApiError> {
        self.calls.borrow_mut().push(Call::Signup(activity.to_owned(), email.to_owned()));
        self.signup.borrow_mut().take().unwrap_or_else(|| Err(not_configured()))
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<MessageResponse, ApiError> {
        self.calls.borrow_mut().push(Call::Unregister(activity.to_owned(), email.to_owned()));
        self.unregister.borrow_mut().take().unwrap_or_else(|| Err(not_configured()))
    }
}

/// Records state and pending hides; `advance` plays the role of the timer.
#[derive(Default)]
struct FakeContext {
    state: RefCell<BoardState>,
    pending_hide: RefCell<Option<(u64, Duration)>>,
}

impl FakeContext {
    fn state(&self) -> BoardState {
        self.state.borrow().clone()
    }

    /// Let `elapsed` pass; fire the pending hide if it is due.
    fn advance(&self, elapsed: Duration) {
        let due = matches!(*self.pending_hide.borrow(), Some((_, after)) if elapsed >= after);
        if due {
            if let Some((seq, _)) = self.pending_hide.borrow_mut().take() {
                self.state.borrow_mut().status.hide(seq);
            }
        }
    }
}

impl BoardContext for FakeContext {
    fn update(&self, f: impl FnOnce(&mut BoardState)) {
        f(&mut self.state.borrow_mut());
    }

    fn schedule_status_hide(&self, seq: u64, after: Duration) {
        // Replacing the pending entry is the cancellation.
        *self.pending_hide.borrow_mut() = Some((seq, after));
    }
}

// =============================================================
// Log capture
// =============================================================

thread_local! {
    static CAPTURED: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        CAPTURED.with(|c| c.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static LOGGER_INIT: Once = Once::new();

fn capture_logs() {
    LOGGER_INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
    });
    CAPTURED.with(|c| c.borrow_mut().clear());
}

fn logged_errors() -> Vec<String> {
    CAPTURED.with(|c| {
        c.borrow()
            .iter()
            .filter(|(level, _)| *level == log::Level::Error)
            .map(|(_, msg)| msg.clone())
            .collect()
    })
}

// =============================================================
// Helpers
// =============================================================

fn chess(participants: &[&str]) -> ActivityCollection {
    ActivityCollection::new(vec![Activity {
        name: "Chess Club".to_owned(),
        description: "Learn strategies".to_owned(),
        schedule: "Fridays".to_owned(),
        max_participants: 12,
        participants: participants.iter().map(|p| (*p).to_owned()).collect(),
    }])
}

fn message(text: &str) -> MessageResponse {
    MessageResponse { message: text.to_owned() }
}

fn status_error(status: u16, detail: Option<&str>) -> ApiError {
    ApiError::Status { status, detail: detail.map(str::to_owned) }
}

fn board(api: FakeApi) -> ActivityBoard<FakeApi, FakeContext> {
    ActivityBoard::new(api, FakeContext::default(), BoardConfig::default())
}

fn fill_form(board: &ActivityBoard<FakeApi, FakeContext>) {
    board.context().update(|s| {
        s.form.email = "new@x.com".to_owned();
        s.form.activity = "Chess Club".to_owned();
    });
}

// =============================================================
// load_activities
// =============================================================

#[test]
fn load_activities_renders_collection() {
    let board = board(FakeApi::default().with_fetch(Ok(chess(&["a@x.com"]))));
    block_on(board.load_activities());
    let state = board.context().state();
    assert_eq!(state.activities.view, crate::state::activities::ListView::Rendered);
    assert_eq!(state.activities.collection, chess(&["a@x.com"]));
    assert!(!state.activities.is_loading());
}

#[test]
fn load_activities_failure_shows_failure_and_logs() {
    capture_logs();
    let board = board(FakeApi::default().with_fetch(Err(ApiError::Decode("expected value".to_owned()))));
    block_on(board.load_activities());
    let state = board.context().state();
    assert_eq!(state.activities.view, crate::state::activities::ListView::Failed);
    assert!(!state.status.visible);
    assert_eq!(board.api().fetch_count(), 1);
    assert!(logged_errors().iter().any(|m| m.starts_with("Error fetching activities")));
}

#[test]
fn load_activities_replaces_previous_collection() {
    let board = board(
        FakeApi::default()
            .with_fetch(Ok(chess(&["a@x.com"])))
            .with_fetch(Ok(chess(&[]))),
    );
    block_on(board.load_activities());
    block_on(board.load_activities());
    let state = board.context().state();
    assert!(state.activities.collection.get("Chess Club").unwrap().participants.is_empty());
}

// =============================================================
// signup
// =============================================================

#[test]
fn signup_success_shows_message_clears_form_and_refreshes() {
    let board = board(
        FakeApi::default()
            .with_signup(Ok(message("Signed up!")))
            .with_fetch(Ok(chess(&["new@x.com"]))),
    );
    fill_form(&board);
    block_on(board.signup("Chess Club", "new@x.com"));

    let state = board.context().state();
    assert_eq!(state.status.text(), "Signed up!");
    assert_eq!(state.status.class(), "message success");
    assert!(state.status.visible);
    assert_eq!(state.form.email, "");
    assert!(!state.form.has_selection());
    assert_eq!(
        board.api().calls(),
        vec![Call::Signup("Chess Club".to_owned(), "new@x.com".to_owned()), Call::Fetch]
    );
    assert_eq!(state.activities.collection, chess(&["new@x.com"]));
}

#[test]
fn signup_http_failure_shows_detail_keeps_form_and_skips_refresh() {
    let board = board(FakeApi::default().with_signup(Err(status_error(400, Some("Already registered")))));
    fill_form(&board);
    block_on(board.signup("Chess Club", "new@x.com"));

    let state = board.context().state();
    assert_eq!(state.status.text(), "Already registered");
    assert_eq!(state.status.class(), "message error");
    assert_eq!(state.form.email, "new@x.com");
    assert_eq!(state.form.activity, "Chess Club");
    assert_eq!(board.api().fetch_count(), 0);
}

#[test]
fn signup_http_failure_without_detail_uses_fallback() {
    let board = board(FakeApi::default().with_signup(Err(status_error(500, None))));
    block_on(board.signup("Chess Club", "new@x.com"));
    assert_eq!(board.context().state().status.text(), SIGNUP_FAILED);
}

#[test]
fn signup_transport_failure_shows_retry_message_and_logs() {
    capture_logs();
    let board = board(FakeApi::default().with_signup(Err(ApiError::Transport("offline".to_owned()))));
    fill_form(&board);
    block_on(board.signup("Chess Club", "new@x.com"));

    let state = board.context().state();
    assert_eq!(state.status.text(), SIGNUP_UNREACHABLE);
    assert_eq!(state.status.severity(), Some(Severity::Error));
    assert_eq!(state.form.email, "new@x.com");
    assert_eq!(board.api().fetch_count(), 0);
    assert!(logged_errors().iter().any(|m| m.starts_with("Error signing up")));
}

#[test]
fn signup_malformed_body_is_treated_as_unreachable() {
    let board = board(FakeApi::default().with_signup(Err(ApiError::Decode("expected value".to_owned()))));
    block_on(board.signup("Chess Club", "new@x.com"));
    assert_eq!(board.context().state().status.text(), SIGNUP_UNREACHABLE);
}

#[test]
fn signup_success_with_failed_refresh_keeps_success_message() {
    let board = board(
        FakeApi::default()
            .with_signup(Ok(message("Signed up!")))
            .with_fetch(Err(ApiError::Transport("offline".to_owned()))),
    );
    block_on(board.signup("Chess Club", "new@x.com"));
    let state = board.context().state();
    assert_eq!(state.status.text(), "Signed up!");
    assert_eq!(state.activities.view, crate::state::activities::ListView::Failed);
}

// =============================================================
// unregister
// =============================================================

#[test]
fn unregister_success_shows_message_and_refreshes() {
    let board = board(
        FakeApi::default()
            .with_unregister(Ok(message("Unregistered a@x.com from Chess Club")))
            .with_fetch(Ok(chess(&[]))),
    );
    block_on(board.unregister("Chess Club", "a@x.com"));

    let state = board.context().state();
    assert_eq!(state.status.text(), "Unregistered a@x.com from Chess Club");
    assert_eq!(state.status.severity(), Some(Severity::Success));
    assert_eq!(
        board.api().calls(),
        vec![Call::Unregister("Chess Club".to_owned(), "a@x.com".to_owned()), Call::Fetch]
    );
}

#[test]
fn unregister_does_not_touch_form() {
    let board = board(FakeApi::default().with_unregister(Ok(message("ok"))).with_fetch(Ok(chess(&[]))));
    fill_form(&board);
    block_on(board.unregister("Chess Club", "a@x.com"));
    assert_eq!(board.context().state().form.email, "new@x.com");
}

#[test]
fn unregister_http_failure_shows_detail_without_refresh() {
    let board = board(FakeApi::default().with_unregister(Err(status_error(404, Some("Participant not found")))));
    block_on(board.unregister("Chess Club", "a@x.com"));
    let state = board.context().state();
    assert_eq!(state.status.text(), "Participant not found");
    assert_eq!(state.status.class(), "message error");
    assert_eq!(board.api().fetch_count(), 0);
}

#[test]
fn unregister_http_failure_without_detail_uses_fallback() {
    let board = board(FakeApi::default().with_unregister(Err(status_error(400, None))));
    block_on(board.unregister("Chess Club", "a@x.com"));
    assert_eq!(board.context().state().status.text(), UNREGISTER_FAILED);
}

#[test]
fn unregister_network_failure_shows_distinct_fallback_and_logs() {
    capture_logs();
    let board = board(FakeApi::default().with_unregister(Err(ApiError::Transport("offline".to_owned()))));
    block_on(board.unregister("Chess Club", "a@x.com"));
    let state = board.context().state();
    assert_eq!(state.status.text(), UNREGISTER_UNREACHABLE);
    assert_ne!(UNREGISTER_UNREACHABLE, UNREGISTER_FAILED);
    assert_eq!(state.status.severity(), Some(Severity::Error));
    assert!(logged_errors().iter().any(|m| m.starts_with("Error removing participant")));
}

// =============================================================
// Status auto-hide
// =============================================================

#[test]
fn status_hides_after_five_seconds() {
    let board = board(FakeApi::default().with_signup(Err(status_error(400, Some("Already registered")))));
    block_on(board.signup("Chess Club", "new@x.com"));

    board.context().advance(Duration::from_millis(4999));
    assert!(board.context().state().status.visible);
    board.context().advance(Duration::from_secs(5));
    assert!(!board.context().state().status.visible);
}

#[test]
fn every_outcome_schedules_a_hide() {
    let board = board(FakeApi::default().with_unregister(Err(ApiError::Transport("offline".to_owned()))));
    block_on(board.unregister("Chess Club", "a@x.com"));
    let pending = *board.context().pending_hide.borrow();
    assert_eq!(pending, Some((1, Duration::from_secs(5))));
}

#[test]
fn newer_message_cancels_older_hide() {
    let board = board(
        FakeApi::default()
            .with_signup(Err(status_error(400, Some("Already registered"))))
            .with_unregister(Ok(message("Removed")))
            .with_fetch(Ok(chess(&[]))),
    );
    block_on(board.signup("Chess Club", "new@x.com"));
    block_on(board.unregister("Chess Club", "a@x.com"));

    let pending = *board.context().pending_hide.borrow();
    assert_eq!(pending.map(|(seq, _)| seq), Some(2));
    assert_eq!(board.context().state().status.text(), "Removed");

    board.context().advance(Duration::from_secs(5));
    assert!(!board.context().state().status.visible);
}

#[test]
fn hide_delay_follows_config() {
    let config = BoardConfig { status_hide_after: Duration::from_secs(2), ..BoardConfig::default() };
    let board = ActivityBoard::new(
        FakeApi::default().with_signup(Err(status_error(400, None))),
        FakeContext::default(),
        config,
    );
    block_on(board.signup("Chess Club", "new@x.com"));
    board.context().advance(Duration::from_secs(2));
    assert!(!board.context().state().status.visible);
}
