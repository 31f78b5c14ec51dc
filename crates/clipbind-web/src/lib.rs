pub mod app;
pub mod components;
pub mod pages;

#[cfg(feature = "hydrate")]
pub mod binder;
#[cfg(feature = "hydrate")]
pub mod clipboard;
#[cfg(feature = "hydrate")]
pub mod dom;

/// Client-side entry point: hydrates the server-rendered page so the copy
/// triggers get their live click handlers.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
