//! The `#activities-list` container with delegated participant removal.

use leptos::prelude::*;

use crate::state::board::BoardState;
use crate::util::dom::RemovalTarget;
use crate::util::html::{busy_attr, render_list};

/// Renders activity cards from escaped markup.
///
/// One click listener lives on the container for the component's lifetime;
/// re-rendering the cards never attaches more.
#[component]
pub fn ActivitiesList(on_remove: Callback<RemovalTarget>) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    let markup = move || board.with(|s| render_list(&s.activities));
    let busy = move || board.with(|s| busy_attr(s.activities.is_loading()));

    let on_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            if let Some(target) = crate::util::dom::removal_target(&ev) {
                on_remove.run(target);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, on_remove);
        }
    };

    view! {
        <div id="activities-list" aria-busy=busy inner_html=markup on:click=on_click></div>
    }
}
