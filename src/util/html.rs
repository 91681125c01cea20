//! Markup for the `#activities-list` container.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is rendered as one HTML string and installed with `inner_html`,
//! so every server-supplied value passes through `escape_html` first. Removal
//! buttons are not wired here; the container's single delegated click
//! listener resolves them through the `data-activity`/`data-email`
//! attributes emitted below.

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::net::types::{Activity, ActivityCollection};
use crate::state::activities::{ActivitiesState, ListView};

pub const LOADING_MESSAGE: &str = "Loading activities...";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS: &str = "No participants yet";

pub const CARD_CLASS: &str = "activity-card";
pub const PARTICIPANT_CLASS: &str = "participant-item";
pub const DELETE_CLASS: &str = "delete-participant";
pub const ACTIVITY_ATTR: &str = "data-activity";
pub const EMAIL_ATTR: &str = "data-email";

/// Escape `&`, `<`, `>`, `"`, `'` (and `/`) for text and quoted attributes.
pub fn escape_html(value: &str) -> Cow<'_, str> {
    html_escape::encode_safe(value)
}

/// `aria-busy` value for the list container while a fetch is in flight.
pub fn busy_attr(loading: bool) -> &'static str {
    if loading { "true" } else { "false" }
}

/// Markup for the list container in its current view.
pub fn render_list(state: &ActivitiesState) -> String {
    match state.view {
        ListView::Pending => format!("<p>{LOADING_MESSAGE}</p>"),
        ListView::Failed => format!("<p>{LOAD_FAILED_MESSAGE}</p>"),
        ListView::Rendered => render_collection(&state.collection),
    }
}

pub fn render_collection(collection: &ActivityCollection) -> String {
    collection.iter().map(render_card).collect()
}

/// One activity card.
pub fn render_card(activity: &Activity) -> String {
    let name = escape_html(&activity.name);
    format!(
        concat!(
            r#"<div class="{card}" {activity_attr}="{name}">"#,
            "<h4>{name}</h4>",
            "<p>{description}</p>",
            "<p><strong>Schedule:</strong> {schedule}</p>",
            "<p><strong>Availability:</strong> {spots} spots left</p>",
            r#"<div class="participants">"#,
            "<h5>Participants ({count})</h5>",
            r#"<ul class="participants-list">{participants}</ul>"#,
            "</div>",
            "</div>",
        ),
        card = CARD_CLASS,
        activity_attr = ACTIVITY_ATTR,
        name = name,
        description = escape_html(&activity.description),
        schedule = escape_html(&activity.schedule),
        spots = activity.spots_left(),
        count = activity.participants.len(),
        participants = render_participants(&activity.participants),
    )
}

fn render_participants(participants: &[String]) -> String {
    if participants.is_empty() {
        return format!(r#"<li class="no-participants">{NO_PARTICIPANTS}</li>"#);
    }
    let mut out = String::new();
    for email in participants {
        let email = escape_html(email);
        let _ = write!(
            out,
            concat!(
                r#"<li class="{item}" {email_attr}="{email}">"#,
                r#"<span class="participant-email">{email}</span> "#,
                r#"<button class="{delete}" title="Remove participant" aria-label="Remove {email}">✖</button>"#,
                "</li>",
            ),
            item = PARTICIPANT_CLASS,
            email_attr = EMAIL_ATTR,
            email = email,
            delete = DELETE_CLASS,
        );
    }
    out
}
