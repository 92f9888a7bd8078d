//! # civil-ui
//!
//! Leptos + WASM presentational layer for the Civil knowledge-management
//! application: deck links, toggles, margin annotations, impact ratings,
//! modal helpers, and the confirm-gated delete gesture.
//!
//! Routing, application-wide data storage, and the backend API are owned by
//! the host application; this crate only renders and holds view-local state.

pub mod app;
pub mod components;
pub mod hooks;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered
/// shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
