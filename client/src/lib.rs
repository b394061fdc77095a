//! # medbook-client
//!
//! Leptos + WASM front end for the MedBook appointment system. Patients and
//! doctors sign in, manage profiles, and book, cancel or complete
//! appointments against an external REST backend.
//!
//! Session handling (token store, claim extraction, role guard) lives in
//! `state` and `util`; the REST client and wire types live in `net`.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
