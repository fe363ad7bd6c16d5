//! Idea0 - Business Idea Brainstorming Chat
//!
//! A single-page web application that turns a short prompt into a templated
//! business idea, built with Leptos and WebAssembly.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
