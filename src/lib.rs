//! # portfolio
//!
//! Leptos + WASM single-page site: public pages for projects, blog posts and
//! contact, plus a guarded admin area for managing content.
//!
//! All session and REST logic lives in the `session` crate. This crate adds
//! the browser side: a `gloo-net` transport, a `localStorage` storage, the
//! reactive context wiring, and the views.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
