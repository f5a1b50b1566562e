//! Course Checkout Web Frontend
//!
//! Leptos-based WASM frontend: the landing page with the plan offers and the
//! checkout page with the validated payment form.

mod app;
mod browser;
mod components;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
