//! # dim-web
//!
//! Leptos + WASM frontend for a self-hosted media server.
//!
//! The interesting part of this crate is the authentication core: a
//! reconciler that keeps the in-memory auth store and the persisted
//! `token` cookie in agreement, a cross-tab login broadcast so sibling
//! tabs pick up a fresh session without re-entering credentials, and a
//! guest-only route gate around the login/register screens. Pages and
//! components stay thin and read shared state from Leptos contexts.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client to server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
