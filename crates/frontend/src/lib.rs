pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // Preloader clock starts as soon as the script runs.
    let started_at = js_sys::Date::now();
    leptos::mount::mount_to_body(move || view! { <app::App started_at=started_at /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
