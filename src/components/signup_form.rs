//! The `#signup-form` with email input and activity select.

use leptos::prelude::*;

use crate::components::activity_select::ActivitySelect;
use crate::state::board::BoardState;

#[component]
pub fn SignupForm(on_submit: Callback<()>) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    view! {
        <form
            id="signup-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="you@example.com"
                    prop:value=move || board.with(|s| s.form.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        board.update(|s| s.form.email = value);
                    }
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <ActivitySelect/>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
