//! # intellicrop-client
//!
//! Leptos + WASM frontend shell for Intellicrop.
//!
//! This crate owns the route table, the in-memory session store, the
//! navigation guard that sits between them, and the page components the
//! table points at. The `intellicrop` host binary server-renders [`app::App`]
//! and the browser hydrates it through [`hydrate`].

pub mod app;
pub mod components;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
