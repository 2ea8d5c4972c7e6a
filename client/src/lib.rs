//! # portal-client
//!
//! Leptos frontend for the patient portal: a routing shell with a patient
//! registration form and a dashboard screen.
//!
//! Built twice: with `hydrate` to WASM for the browser, and with `ssr` as a
//! dependency of `portal-server`, which renders the same routes on the server.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point. Installs panic and logging hooks, then hydrates the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::error!("console logger init failed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
