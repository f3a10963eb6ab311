//! # site
//!
//! Leptos + WASM frontend for the single-page portfolio.
//!
//! This crate contains the root composition, the section components, the
//! navigation state, the static content tables, and the browser bridges that
//! feed viewport geometry and frame ticks into the `motion` engine. It is
//! server-rendered by the root `portfolio` binary (`ssr` feature) and
//! hydrated in the browser (`hydrate` feature).

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    leptos::mount::hydrate_body(app::App);
}
