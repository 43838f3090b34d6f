//! # client
//!
//! Leptos + WASM frontend for the real-estate marketing site.
//!
//! This crate contains the landing sections, the stories carousel, the
//! campaign blog and detail page, the share dialog, the injected state
//! stores, and the HTTP client for the host's `/api` proxy. The host server
//! renders it with SSR (`ssr` feature); the browser bundle hydrates it
//! (`hydrate` feature).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
