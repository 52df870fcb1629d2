pub mod app;
pub mod components;
pub mod config;
pub mod preview;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // cards in the server-rendered page upgrade as soon as the tag is defined
    if let Err(e) = preview::define_podcast_preview() {
        log::error!("Failed to register <{}>: {}", preview::TAG_NAME, e);
    }
    leptos::mount::hydrate_body(App);
}
