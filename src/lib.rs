//! # portfolio-client
//!
//! Leptos + WASM interaction layer for a statically served portfolio
//! page: theme toggle, header scroll state, active-section navigation,
//! mobile menu, scroll reveal, contact form submission, and smooth
//! anchor scrolling.
//!
//! Each interactive behavior is modeled as a pure state transition in
//! [`state`] and projected onto the DOM by [`components`]. Browser-only
//! glue (localStorage, intersection observers, scrolling) lives in
//! [`util`], and the single network call in [`net`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
