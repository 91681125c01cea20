//! Activity board operations: load, signup, unregister.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ActivityBoard` is built once at startup from an `ActivityApi` and a
//! `BoardContext` (the UI-context object) and shared by every event handler.
//! Operations are terminal UI actions: they return nothing and surface every
//! outcome through `BoardState`.
//!
//! ERROR HANDLING
//! ==============
//! HTTP-level failures show the server's `detail` text, falling back to a
//! fixed message. Transport and decoding failures are logged and show a
//! distinct "please try again" message. Nothing is retried.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::time::Duration;

use crate::config::BoardConfig;
use crate::net::api::{ActivityApi, ApiError};
use crate::state::board::BoardState;
use crate::state::status::Severity;

pub const SIGNUP_FAILED: &str = "An error occurred";
pub const SIGNUP_UNREACHABLE: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED: &str = "Failed to remove participant";
pub const UNREGISTER_UNREACHABLE: &str = "Failed to remove participant. Please try again.";

/// Mutable UI surface the operations write to.
pub trait BoardContext {
    /// Apply a mutation to the page state and re-render.
    fn update(&self, f: impl FnOnce(&mut BoardState));

    /// Hide status message `seq` after `after`, cancelling any hide that is
    /// still pending.
    fn schedule_status_hide(&self, seq: u64, after: Duration);
}

pub struct ActivityBoard<A, C> {
    api: A,
    ctx: C,
    config: BoardConfig,
}

impl<A, C> ActivityBoard<A, C>
where
    A: ActivityApi,
    C: BoardContext,
{
    pub fn new(api: A, ctx: C, config: BoardConfig) -> Self {
        Self { api, ctx, config }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn context(&self) -> &C {
        &self.ctx
    }

    /// Fetch the full collection and rebuild the list and select from it.
    pub async fn load_activities(&self) {
        self.ctx.update(|s| s.activities.begin_load());
        match self.api.fetch_activities().await {
            Ok(collection) => {
                log::debug!("loaded {} activities", collection.len());
                self.ctx.update(|s| s.apply_collection(collection));
            }
            Err(e) => {
                log::error!("Error fetching activities: {e}");
                self.ctx.update(|s| s.activities.fail_load());
            }
        }
    }

    /// Register `email` for `activity`; on success clear the form and wait
    /// for the refreshed list.
    pub async fn signup(&self, activity: &str, email: &str) {
        match self.api.signup(activity, email).await {
            Ok(body) => {
                self.show_status(body.message, Severity::Success);
                self.ctx.update(|s| s.form.reset());
                self.load_activities().await;
            }
            Err(e) => {
                let text = failure_text(&e, SIGNUP_FAILED, SIGNUP_UNREACHABLE, "Error signing up");
                self.show_status(text, Severity::Error);
            }
        }
    }

    /// Remove `email` from `activity`. Which entries go away when the roster
    /// holds duplicates is up to the server.
    pub async fn unregister(&self, activity: &str, email: &str) {
        match self.api.unregister(activity, email).await {
            Ok(body) => {
                self.show_status(body.message, Severity::Success);
                self.load_activities().await;
            }
            Err(e) => {
                let text = failure_text(&e, UNREGISTER_FAILED, UNREGISTER_UNREACHABLE, "Error removing participant");
                self.show_status(text, Severity::Error);
            }
        }
    }

    fn show_status(&self, text: impl Into<String>, severity: Severity) {
        let text = text.into();
        let mut seq = 0;
        self.ctx.update(|s| seq = s.status.show(text, severity));
        self.ctx.schedule_status_hide(seq, self.config.status_hide_after);
    }
}

/// Message for a failed roster change. Transport and decoding failures are
/// logged here; HTTP-level failures are expected outcomes and are not.
fn failure_text(err: &ApiError, fallback: &str, unreachable: &str, log_prefix: &str) -> String {
    if err.is_status() {
        log::debug!("{log_prefix}: {err}");
        return err.detail().unwrap_or(fallback).to_owned();
    }
    log::error!("{log_prefix}: {err}");
    unreachable.to_owned()
}
