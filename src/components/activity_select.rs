//! Activity `<select>` rebuilt from the current collection.

use leptos::prelude::*;

use crate::state::board::BoardState;

/// Select control with the default first option always present.
#[component]
pub fn ActivitySelect() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    // Only re-render the options when names or selection change, not on
    // every keystroke in the email field.
    let options = Memo::new(move |_| board.with(BoardState::activity_options));

    view! {
        <select
            id="activity"
            required
            on:change=move |ev| {
                let value = event_target_value(&ev);
                board.update(|s| s.form.activity = value);
            }
        >
            <option value="" prop:selected=move || board.with(|s| !s.form.has_selection())>
                "-- Select an activity --"
            </option>
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|option| {
                        let label = option.name.clone();
                        view! {
                            <option value=option.name prop:selected=option.selected>
                                {label}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </select>
    }
}
