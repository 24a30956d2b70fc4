//! # client
//!
//! Leptos + WASM frontend for the Nexus host page.
//!
//! The server renders the page shell (`app::shell`) and the browser hydrates
//! it through [`hydrate`]. Theme rules live in the `theme` crate; this crate
//! only renders the toggle control and binds the controller to the real DOM.

pub mod app;
pub mod components;
pub mod pages;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A logger is already installed when the module is re-initialized by hot reload.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
