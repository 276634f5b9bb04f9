//! # gradeview-client
//!
//! Leptos + WASM frontend shell for the grade analytics dashboard.
//!
//! This crate owns client-side navigation gating: every view transition is
//! checked against the persisted session token before the destination view
//! renders. Page bodies live elsewhere; the route views here are placeholders
//! that the gate wraps.

pub mod app;
pub mod components;
pub mod config;
pub mod guard;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger init failed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
