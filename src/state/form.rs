//! Signup form fields.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Mirrors the `#signup-form` controls. An empty `activity` is the default
/// first option of the select.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

impl SignupForm {
    /// Clear the email and return the select to its default option.
    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.clear();
    }

    pub fn has_selection(&self) -> bool {
        !self.activity.is_empty()
    }
}
