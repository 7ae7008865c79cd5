//! NeuralDetect Web App (Leptos + WASM)

mod app;
mod components;
mod api;
mod browser_file;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("NeuralDetect starting...");

    leptos::mount::mount_to_body(app::App);
}
