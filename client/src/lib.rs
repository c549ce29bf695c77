//! # client
//!
//! Leptos + WASM admin login screen for the UMKM dashboard.
//!
//! The login flow itself lives in the `auth` crate; this crate renders the
//! form and supplies browser-backed capabilities (`document.cookie`,
//! `localStorage`, `fetch`, toasts, router navigation).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
