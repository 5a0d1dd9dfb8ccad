//! # login-client
//!
//! Leptos + WASM login form with a client-side session store.
//!
//! The crate renders a credential form, posts it to the configured API, keeps
//! the returned token in `localStorage`, and records the signed-in user in a
//! reactive session signal shared through context.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
