//! Aggregate UI state for the activity board page.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use super::activities::ActivitiesState;
use super::form::SignupForm;
use super::status::StatusState;
use crate::net::types::ActivityCollection;

/// Everything the page renders, held in one signal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardState {
    pub activities: ActivitiesState,
    pub status: StatusState,
    pub form: SignupForm,
}

/// One non-default entry of the activity select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityOption {
    pub name: String,
    pub selected: bool,
}

impl BoardState {
    /// Install a freshly fetched collection. The select is rebuilt from
    /// scratch, so it always returns to its default option.
    pub fn apply_collection(&mut self, collection: ActivityCollection) {
        self.form.activity.clear();
        self.activities.finish_load(collection);
    }

    /// Select entries in collection order, after the default option.
    pub fn activity_options(&self) -> Vec<ActivityOption> {
        self.activities
            .collection
            .names()
            .map(|name| ActivityOption { name: name.to_owned(), selected: self.form.activity == name })
            .collect()
    }
}
