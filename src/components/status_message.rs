//! Status area reporting the outcome of the last action.

use leptos::prelude::*;

use crate::state::board::BoardState;

#[component]
pub fn StatusMessage() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    view! {
        <div id="message" class=move || board.with(|s| s.status.class())>
            {move || board.with(|s| s.status.text().to_owned())}
        </div>
    }
}
