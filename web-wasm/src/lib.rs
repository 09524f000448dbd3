//! Camera TestGen Review Dashboard (Leptos + WASM)

pub mod api;
mod app;
mod components;
mod pages;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Camera TestGen review dashboard starting");
    leptos::mount::mount_to_body(app::App);
}
