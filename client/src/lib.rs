//! # client
//!
//! Leptos frontend for the admin dashboard: one generic CRUD table per
//! managed resource, a summary dashboard, and a display-only sign-in page.
//!
//! The `ssr` feature renders the app inside the Axum server; the `hydrate`
//! feature builds the WASM bundle that takes over in the browser and performs
//! every REST call against the server's `/api/resources` proxy.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
