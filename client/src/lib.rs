//! # portal-client
//!
//! Leptos + WASM frontend for the property portal: sign-in and registration,
//! filtered listing browsing, listing creation for verified agents, and
//! contacting a listing's agent by call, WhatsApp or email.
//!
//! All data lives on the backend REST API; this crate holds only session,
//! listing and toast state plus the calls that keep them in sync.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
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
