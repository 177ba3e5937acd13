//! # client
//!
//! Leptos + WASM frontend for the flashcards application.
//!
//! This crate contains the two route-level pages (category list and word
//! editor), their components, plain-struct page state, and the REST client
//! for the `/api/categories` resource.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
