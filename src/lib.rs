//! # auth-ui
//!
//! Leptos + WASM frontend for a cookie-session authentication flow.
//! Two forms (login, signup), an authenticated landing view, and a thin
//! HTTP client for the remote identity service.
//!
//! This crate contains pages, components, application state, and the
//! session API client. State and protocol normalization are plain Rust
//! with no browser dependency, so they test natively; real network calls
//! are gated behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
