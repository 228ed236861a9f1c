//! Leptos front end for the portfolio site.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled twice: to WASM with the `hydrate` feature for the browser, and
//! natively with the `ssr` feature for server-side rendering inside the
//! Axum host. Network and cookie access only exist under `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
