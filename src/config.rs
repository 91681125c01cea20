//! Startup configuration for the activity board.
//!
//! The host page may point the client at another origin with
//! `<meta name="activity-board-api-base" content="https://api.example.com">`.
//! Without it, requests go to the page's own origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Meta tag consulted by [`BoardConfig::from_document`].
pub const API_BASE_META: &str = "activity-board-api-base";

/// How long a status message stays visible.
pub const STATUS_HIDE_AFTER: Duration = Duration::from_secs(5);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// Prefix for every endpoint path, without a trailing slash.
    pub api_base: String,
    pub status_hide_after: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { api_base: String::new(), status_hide_after: STATUS_HIDE_AFTER }
    }
}

impl BoardConfig {
    /// Defaults overridden by the host document's meta tag, if present.
    pub fn from_document() -> Self {
        let mut config = Self::default();
        if let Some(base) = crate::util::dom::meta_content(API_BASE_META) {
            config.api_base = normalize_api_base(&base);
        }
        config
    }
}

/// Trim whitespace and trailing slashes so endpoint paths can be appended.
pub fn normalize_api_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
