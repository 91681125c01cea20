//! Browser implementation of `BoardContext`.
//!
//! DESIGN
//! ======
//! Built once by `App` and handed to `ActivityBoard`. Holds the page signal
//! and the single pending auto-hide timer; storing a new `Timeout` drops the
//! previous one, which cancels it.

use std::time::Duration;

use leptos::prelude::*;

use crate::board::BoardContext;
use crate::state::board::BoardState;

#[derive(Clone, Copy)]
pub struct UiContext {
    state: RwSignal<BoardState>,
    #[cfg(feature = "csr")]
    hide_timer: StoredValue<Option<gloo_timers::callback::Timeout>, LocalStorage>,
}

impl UiContext {
    pub fn new(state: RwSignal<BoardState>) -> Self {
        Self {
            state,
            #[cfg(feature = "csr")]
            hide_timer: StoredValue::new_local(None),
        }
    }
}

impl BoardContext for UiContext {
    fn update(&self, f: impl FnOnce(&mut BoardState)) {
        self.state.update(f);
    }

    fn schedule_status_hide(&self, seq: u64, after: Duration) {
        #[cfg(feature = "csr")]
        {
            let state = self.state;
            let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
            let timeout = gloo_timers::callback::Timeout::new(millis, move || {
                let _ = state.try_update(|s| s.status.hide(seq));
            });
            self.hide_timer.set_value(Some(timeout));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (seq, after);
        }
    }
}
