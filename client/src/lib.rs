//! Leptos front end for the PRF building-maintenance dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled twice: to WASM with the `hydrate` feature for the browser, and
//! natively with the `ssr` feature for server-side rendering inside the
//! `server` crate. Pure view-model logic lives in `state` and `util` so it is
//! testable on the host target without a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the client runtime to server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
