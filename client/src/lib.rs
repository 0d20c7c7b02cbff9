//! # client
//!
//! Leptos frontend for the AETHER club website: public pages (home, team,
//! speakers, events, wings) and the admin registrations view.
//!
//! Rendered on the server through the `ssr` feature and hydrated in the
//! browser through `hydrate`. Browser-only concerns (fetch, localStorage,
//! canvas, timers) sit behind `#[cfg(feature = "hydrate")]` so every module
//! also builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
