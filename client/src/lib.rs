//! # folio-client
//!
//! Leptos + WASM front-end for the portfolio site: profile, projects,
//! certifications, blog, live Bitcoin network stats, a Nostr marketplace and
//! an AI chat assistant, all fed by the portfolio REST API.
//!
//! The crate builds twice: with `ssr` it is linked into `folio-server` for
//! server rendering, and with `hydrate` it compiles to WASM and takes over the
//! server-rendered DOM in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("folio hydrating against {}", net::api::API_BASE_URL);
    leptos::mount::hydrate_body(app::App);
}
