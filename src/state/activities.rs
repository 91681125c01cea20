//! Activity list state and its load lifecycle.
//!
//! DESIGN
//! ======
//! `view` records what the list container currently shows and only changes
//! when a load settles, so a refresh in flight keeps the previous cards (or
//! the previous failure message) on screen until it completes.

#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use crate::net::types::ActivityCollection;

/// What the `#activities-list` container shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListView {
    /// Nothing has loaded yet.
    #[default]
    Pending,
    /// Cards for `collection`.
    Rendered,
    /// The fixed load-failure message.
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivitiesState {
    /// Last successfully fetched collection; also feeds the select options.
    pub collection: ActivityCollection,
    pub view: ListView,
    /// Number of fetches in flight. Overlapping refreshes are not cancelled.
    pub in_flight: u32,
}

impl ActivitiesState {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn begin_load(&mut self) {
        self.in_flight = self.in_flight.saturating_add(1);
    }

    /// Replace the collection wholesale.
    pub fn finish_load(&mut self, collection: ActivityCollection) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.collection = collection;
        self.view = ListView::Rendered;
    }

    /// Show the failure message. The previous collection is kept so the
    /// select options stay usable.
    pub fn fail_load(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.view = ListView::Failed;
    }
}
