pub mod app;
pub mod board;
pub mod client;
pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;

    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
