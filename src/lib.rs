//! # bank-web
//!
//! Leptos + WASM single-page client for the bank service.
//!
//! This crate contains the application shell (routing, theme, mounting),
//! the shared auth store, pages, and the API types the login flow hands to
//! the store.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic and log hooks, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    if let Err(e) = app::mount(config::ShellConfig::default()) {
        log::error!("failed to start: {e}");
    }
}
