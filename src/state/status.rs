//! Transient status message shown after signup/unregister.
//!
//! DESIGN
//! ======
//! Every `show` bumps a sequence number and returns it. The auto-hide timer
//! carries the number it was scheduled for, so a hide that fires after a
//! newer message was shown is ignored instead of hiding the newer message.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Outcome styling of a status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// CSS class list for the message area.
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "message success",
            Self::Error => "message error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

/// Message area state. Starts hidden with no text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusState {
    pub current: Option<StatusMessage>,
    pub visible: bool,
    pub seq: u64,
}

impl StatusState {
    /// Replace the current message, make it visible, and return the sequence
    /// number the auto-hide must present.
    pub fn show(&mut self, text: impl Into<String>, severity: Severity) -> u64 {
        self.seq = self.seq.wrapping_add(1);
        self.current = Some(StatusMessage { text: text.into(), severity });
        self.visible = true;
        self.seq
    }

    /// Hide the message if `seq` still identifies it. Returns whether it was hidden.
    pub fn hide(&mut self, seq: u64) -> bool {
        if seq != self.seq {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn text(&self) -> &str {
        self.current.as_ref().map_or("", |m| m.text.as_str())
    }

    pub fn severity(&self) -> Option<Severity> {
        self.current.as_ref().map(|m| m.severity)
    }

    /// Full class attribute for the `#message` element.
    pub fn class(&self) -> String {
        match (&self.current, self.visible) {
            (Some(message), true) => message.severity.class().to_owned(),
            (Some(message), false) => format!("{} hidden", message.severity.class()),
            (None, _) => "hidden".to_owned(),
        }
    }
}
