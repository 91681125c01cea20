//! UI components of the activity board page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the page state from the `RwSignal<BoardState>` context and
//! report user intent upward through callbacks; they never call the backend.

pub mod activities_list;
pub mod activity_select;
pub mod signup_form;
pub mod status_message;
