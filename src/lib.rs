//! # activity-board
//!
//! Leptos + WASM client for the activities signup page.
//!
//! This crate loads the activity collection from the REST backend, renders
//! activity cards and the signup form, submits signup/unregister requests,
//! and reports each outcome in an auto-dismissing status message. Browser-only
//! code sits behind the `csr` feature; everything else builds and tests
//! natively.

pub mod app;
pub mod board;
pub mod components;
pub mod config;
pub mod context;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging and the panic hook, then mount `App`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    leptos::mount::mount_to_body(app::App);
}
