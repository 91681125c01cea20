//! Root application component.

use std::rc::Rc;

use leptos::prelude::*;

use crate::board::ActivityBoard;
use crate::components::{
    activities_list::ActivitiesList, signup_form::SignupForm, status_message::StatusMessage,
};
use crate::config::BoardConfig;
use crate::context::UiContext;
use crate::net::api::HttpActivityApi;
use crate::state::board::BoardState;
use crate::util::dom::RemovalTarget;

/// The board as wired in the browser.
pub type BrowserBoard = ActivityBoard<HttpActivityApi, UiContext>;

/// Run an operation on the UI event loop.
fn spawn(task: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "csr"))]
    drop(task);
}

/// Root application component.
///
/// Builds the UI context and the board once, provides the page state to
/// child components, and kicks off the initial load.
#[component]
pub fn App() -> impl IntoView {
    let config = BoardConfig::from_document();
    let state = RwSignal::new(BoardState::default());
    provide_context(state);

    let api = HttpActivityApi::new(config.api_base.clone());
    let board: StoredValue<Rc<BrowserBoard>, LocalStorage> =
        StoredValue::new_local(Rc::new(ActivityBoard::new(api, UiContext::new(state), config)));

    let on_remove = Callback::new(move |target: RemovalTarget| {
        let board = board.get_value();
        spawn(async move { board.unregister(&target.activity, &target.email).await });
    });

    let on_submit = Callback::new(move |()| {
        let form = state.with_untracked(|s| s.form.clone());
        let board = board.get_value();
        spawn(async move { board.signup(&form.activity, &form.email).await });
    });

    spawn({
        let board = board.get_value();
        async move { board.load_activities().await }
    });

    view! {
        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivitiesList on_remove=on_remove/>
            </section>
            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm on_submit=on_submit/>
                <StatusMessage/>
            </section>
        </main>
    }
}
