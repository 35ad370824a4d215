#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod assets;
pub mod catalog;
#[cfg(feature = "ssr")]
pub mod error;
pub mod reveal;
pub mod toggle;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
