//! # stb-portal-client
//!
//! Leptos + WASM frontend for the STB proxy login flow.
//!
//! The crate hosts the login form and the logout control. Each one fires a
//! single `POST` (`/lin`, `/lout`), compares the plain-text reply against the
//! `"OK"` sentinel, then either navigates or alerts the reply verbatim.

pub mod app;
pub mod auth;
pub mod config;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: wire up console logging and hydrate the server-rendered
/// markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
