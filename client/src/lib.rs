//! # console
//!
//! Leptos + WASM front end for the hexauth admin console (dashboard,
//! products, licenses, clients, audit logs).
//!
//! Every API call goes through the `gate` request pipeline and every route
//! transition through its navigation guard. This crate supplies the browser
//! halves of those seams: `localStorage` session storage, a `fetch`
//! transport, `window.location` hard redirects, and a reactive progress
//! indicator.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the console.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
