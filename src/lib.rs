//! # lms-client
//!
//! Leptos + WASM frontend for the learning-management system.
//!
//! The only stateful part of the client is the session core: a
//! `SessionStore` that mirrors "logged in, and as what role" from a
//! client-readable marker cookie, kept honest by a route observer and
//! written only by the login and logout flows. Pages and components read it
//! through Leptos context.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
